use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::core::Value,
    },
    util::text::similarity,
};

impl Environment {
    /// Resolves an identifier to a value.
    ///
    /// Identifier resolution checks, in order:
    /// 1. The contextual keywords `prev` (the most recent result) and
    ///    `history` (all prior results, as an array).
    /// 2. Named constants such as `Pi`.
    /// 3. The reference table, by symbol or case-insensitive name.
    /// 4. Variables bound by the program.
    /// 5. Typo-tolerant matching against all bound variable names.
    ///
    /// The final step only fails when no variable is bound at all, so a
    /// misspelled name resolves to its closest match instead of erroring.
    ///
    /// # Parameters
    /// - `name`: Identifier as written in the source.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The resolved value.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use unical::{
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    ///     reference::ReferenceTable,
    /// };
    ///
    /// let mut environment = Environment::new(Rc::new(ReferenceTable::bundled().unwrap()));
    /// environment.variables.insert("rent".to_string(), Value::Integer(800));
    ///
    /// let exact = environment.eval_identifier("rent", 1).unwrap();
    /// let fuzzy = environment.eval_identifier("r", 1).unwrap();
    ///
    /// assert_eq!(exact, Value::Integer(800));
    /// assert_eq!(fuzzy, Value::Integer(800));
    /// ```
    pub fn eval_identifier(&self, name: &str, line: usize) -> EvalResult<Value> {
        if name.is_empty() {
            return Err(RuntimeError::EmptyIdentifier { line });
        }

        if name == "prev" {
            return Ok(self.history.last().cloned().unwrap_or(Value::Nil));
        }
        if name == "history" {
            return Ok(Value::from(self.history.clone()));
        }

        if let Some(constant) = self.constants.get(name) {
            return Ok(constant.clone());
        }
        if let Some(record) = self.reference.find(name) {
            return Ok(record.clone());
        }
        if let Some(value) = self.variables.get(name) {
            return Ok(value.clone());
        }

        self.resolve_with_typo_tolerance(name, line)
    }

    /// Resolves an unmatched identifier against the bound variable names.
    ///
    /// Each candidate is scored with [`similarity`], and the value of the
    /// highest-scoring name wins. Ties go to the lexicographically smallest
    /// name, so resolution is deterministic.
    ///
    /// # Errors
    /// Returns `UnknownVariable` when no variable is bound.
    #[allow(clippy::float_cmp)]
    pub fn resolve_with_typo_tolerance(&self, name: &str, line: usize) -> EvalResult<Value> {
        let mut best: Option<(&String, &Value, f64)> = None;

        for (candidate, value) in &self.variables {
            let score = similarity(name, candidate);
            let better = match best {
                None => true,
                Some((best_name, _, best_score)) => {
                    score > best_score || (score == best_score && candidate < best_name)
                },
            };

            if better {
                best = Some((candidate, value, score));
            }
        }

        match best {
            Some((_, value, _)) => Ok(value.clone()),
            None => Err(RuntimeError::UnknownVariable { name: name.to_owned(),
                                                        line }),
        }
    }
}
