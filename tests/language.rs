use std::{fs, rc::Rc};

use unical::{evaluate, interpreter::evaluator::core::Environment, reference::ReferenceTable, run};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code) {
                panic!("DSL example {} in {:?} failed:\n{}\nError: {}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```unical") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run(src).is_ok() {
        panic!("Script succeeded but was expected to fail: {src}")
    }
}

fn assert_result(src: &str, want: &str) {
    match run(src) {
        Ok(program) => {
            let got = program.last_value().map_or_else(String::new, ToString::to_string);
            assert_eq!(got, want, "script: {src}");
        },
        Err(e) => panic!("Script failed: {e}\nscript: {src}"),
    }
}

#[test]
fn literal_values_render() {
    assert_result("10", "10");
    assert_result("10.2", "10.2");
    assert_result("'hello world'", "hello world");
    assert_result("\"uni\" + 'cal'", "unical");
    assert_result("10 m", "10 m");
    assert_result("10%", "10%");
    assert_result("[1, 2, 3]", "[1,2,3]");
}

#[test]
fn renderings_reparse_to_the_same_value() {
    for source in ["10", "10.2", "10 km", "12%", "[1,2.5,3 km]"] {
        let rendered = run(source).unwrap().last_value().unwrap().to_string();
        assert_result(&rendered, &rendered);
    }
}

#[test]
fn precedence_and_grouping() {
    assert_result("1 + 2 * 3", "7");
    assert_result("(1 + 2) * 3", "9");
    assert_result("2 ^ 10", "1024");
    assert_result("2 - 3 - 4", "-5");
    assert_result("2 ^ 3 ^ 2", "64");
    assert_result("-10 ^ 2", "100");
}

#[test]
fn word_operator_aliases() {
    assert_result("50% of 240", "120");
    assert_result("240 per 4", "60");
}

#[test]
fn results_collapse_to_integers() {
    assert_result("10 / 2", "5");
    assert_result("10 / 4", "2.5");
    assert_result("1 / 3", "0.33333");
    assert_result("0.1 + 0.2", "0.3");
    assert_result("4 / 0", "inf");
}

#[test]
fn comparisons_answer_integers() {
    assert_result("4 > 2", "1");
    assert_result("4 < 2", "0");
    assert_result("4 >= 4", "1");
    assert_result("10 <= 9", "0");
    assert_result("4 == 2", "0");
    assert_result("4 != 2", "1");
}

#[test]
fn unary_operators() {
    assert_result("-10", "-10");
    assert_result("-10.2", "-10.2");
    assert_result("!1", "0");
    assert_result("!0", "1");
    assert_result("!''", "1");
    assert_result("!'text'", "0");
    assert_result("!10 m", "0 m");
    assert_result("~10.2", "10");
    assert_result("~2.5", "3");
    assert_result("~10", "10");
    assert_failure("-'text'");
    assert_failure("~'text'");
}

#[test]
fn assignments_are_silent() {
    assert_result("x = 5", "");
    assert_result("x = 5\nx", "5");
    assert_result("x = 5; x * 2", "10");
    assert_result("x = 1\nx = x + 1\nx", "2");
}

#[test]
fn program_rendering_keeps_statement_order() {
    let program = run("1 + 1\n2 + 2").unwrap();
    assert_eq!(program.to_string(), "2\n4");

    let program = run("1 + 1\nx = 9\nx - 1").unwrap();
    assert_eq!(program.to_string(), "2\n8");
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    assert_result("// a note to self\n1 + 1", "2");
    assert_result("1 + 1\n\n\n2 + 2", "4");
}

#[test]
fn percentage_arithmetic() {
    assert_result("50 * 10%", "5");
    assert_result("50 + 10%", "50.1");
    assert_result("10% + 10%", "20%");
    assert_result("50% * 50%", "25%");
    assert_result("(10 + 2)%", "12%");
    assert_result("9 % 4", "1");
    assert_result("price = 250\nprice * 120%", "300");
}

#[test]
fn unit_arithmetic_keeps_the_unit() {
    assert_result("4 km / 100 m", "40 m");
    assert_result("4 + 100 m", "104 m");
    assert_result("40 m * 10", "400 m");
    assert_result("10 km + 500 m", "10500 m");
    assert_result("50% * 10 km", "5 km");
}

#[test]
fn unit_conversions() {
    assert_result("100 m in km", "0.1 km");
    assert_result("40 m * 100 m in km", "4 km");
    assert_result("4 km / 100 m in km", "0.04 km");
    assert_result("1 mi in km", "1.60934 km");
    assert_result("10 kilometer in mile", "6.21371 mile");
    assert_result("32 F in C", "0 C");
    assert_result("0 C in K", "273.15 K");
    assert_result("1 GB in MB", "1000 MB");
    assert_result("1 wk => d", "7 d");
}

#[test]
fn conversions_label_rather_than_fail() {
    assert_result("10 in km", "10 km");
    assert_result("10 m in h", "10 h");
}

#[test]
fn conversion_errors() {
    assert_failure("10 m in hours");
    assert_failure("10 msdf in km");
    assert_failure("10 m in hosdfrs");
    assert_failure("'text' in km");
    assert_failure("10 m in 5");
}

#[test]
fn unsupported_binary_pairings_fail() {
    assert_failure("'hello' * 'j'");
    assert_failure("10 + 'hello'");
    assert_failure("[1, 2] * 2");
    assert_failure("lookup('H') + 1");
}

#[test]
fn builtin_functions() {
    assert_result("frac(1, 2)", "0.5");
    assert_result("root(9)", "3");
    assert_result("root(8, 3)", "2");
    assert_result("sum(1, 2, 3)", "6");
    assert_result("sum([10, 20, 30])", "60");
    assert_result("sum(1 km, 500 m)", "1500 m");
}

#[test]
fn trigonometry_works_in_degrees() {
    assert_result("sin(90)", "1");
    assert_result("cos(0)", "1");
    assert_result("tan(45)", "1");
    assert_result("asin(1)", "90");
    assert_result("acos(0)", "90");
    assert_result("atan(1)", "45");
}

#[test]
fn builtin_arity_errors() {
    assert_failure("root()");
    assert_failure("root(1, 2, 3)");
    assert_failure("frac()");
    assert_failure("frac(1)");
    assert_failure("sum()");
    assert_failure("sin(1, 2)");
}

#[test]
fn output_builtins_answer_nothing() {
    assert_result("lookup('H')", "");
    assert_result("print('hello world')", "");
    assert_result("print()", "");
    assert_failure("lookup(10)");
    assert_failure("lookup('unobtainium')");
}

#[test]
fn reference_identifiers_resolve() {
    assert_result("H.atomic_mass", "1.008");
    assert_result("hydrogen.atomic_mass", "1.008");
    assert_result("gold.density", "19.3");
    assert_result("K.shells", "[2,8,8,1]");
    assert_result("Silicon.category", "metalloid");
    assert_result("He.number", "2");
    assert_result("H.atomic_mass * 2 + O.atomic_mass", "18.015");
}

#[test]
fn reference_entries_shadow_variables() {
    assert_result("Fe = 5\nFe.atomic_mass", "55.845");
}

#[test]
fn field_access_errors() {
    assert_failure("H.unknown_field");
    assert_failure("(1 + 2).field");
}

#[test]
fn user_defined_functions() {
    assert_result("define square(x) => x * x\nsquare(9)", "81");
    assert_result("define f(x) => x ^ 2\nf(9)", "81");
    assert_result("define add(a, b) => a + b\nadd(2, 5)", "7");
    assert_result("define report(x) => x * 2; x * 3\nreport(5)", "15");
    assert_result("define f(x) => x + 1\ndefine f(x) => x + 2\nf(1)", "3");
    assert_result("define vat(price) => price * 120%\nvat(250)", "300");
}

#[test]
fn function_bodies_are_isolated() {
    assert_failure("y = 10\ndefine f() => y\nf()");
    assert_failure("define g(x) => x + 1\ndefine f(x) => g(x)\nf(1)");
}

#[test]
fn builtins_shadow_user_definitions() {
    assert_result("define sin(x) => x\nsin(90)", "1");
}

#[test]
fn function_call_errors() {
    assert_failure("f(8)");
    assert_failure("prev()");
    assert_failure("define f(x, y) => x + y\nf(3)");
    assert_failure("define f(x) => x\nf(1, 2)");
}

#[test]
fn typo_tolerant_identifiers() {
    assert_result("rent = 100\nr", "100");
    assert_result("rent = 100\nrnt * 2", "200");
    assert_result("ab = 1\nac = 2\na", "1");
    assert_failure("somename");
}

#[test]
fn session_history() {
    assert_result("5 * 5\nprev + 1", "26");
    assert_result("5 * 5; prev + 1", "26");
    assert_result("5 * 5\nprev + 1\nhistory", "[25,26]");
    assert_result("history", "[]");
    assert_result("prev", "");
    assert_result("x = 1\nprev", "");
}

#[test]
fn arrays_and_indexing() {
    assert_result("[1, 2, 3] + 4", "[1,2,3,4]");
    assert_result("[1, 2] + [3, 4]", "[1,2,3,4]");
    assert_result("readings = [12, 19, 7]\nreadings[1]", "19");
    assert_result("[10, 20][1 + 1 - 1]", "20");
    assert_result("[]", "[]");
}

#[test]
fn indexing_errors() {
    assert_failure("[1, 2][5]");
    assert_failure("[1, 2][-1]");
    assert_failure("[1, 2]['x']");
    assert_failure("5[0]");
}

#[test]
fn parse_errors() {
    assert_failure("1 +");
    assert_failure("(1 + 2");
    assert_failure("[1, 2");
    assert_failure("1 2");
    assert_failure("1 ) 2");
    assert_failure("$");
    assert_failure("define f => 1");
    assert_failure("define f(x) =>");
    assert_failure("9223372036854775808");
}

#[test]
fn oversized_integers_fail_arithmetic() {
    assert_failure("9007199254740993 + 1");
}

#[test]
fn predefined_constants() {
    assert_result("Pi", "3.14159");
    assert_result("E", "2.71828");
    assert_result("Pi * 2", "6.28318");
}

#[test]
fn environment_persists_across_inputs() {
    let mut environment = Environment::new(Rc::new(ReferenceTable::bundled().unwrap()));

    evaluate("rent = 800", &mut environment).unwrap();
    let result = evaluate("rent * 2", &mut environment).unwrap();
    assert_eq!(result.to_string(), "1600");

    evaluate("5 * 5", &mut environment).unwrap();
    let result = evaluate("prev + 1", &mut environment).unwrap();
    assert_eq!(result.to_string(), "26");
}

#[test]
fn custom_units_convert() {
    let mut environment = Environment::new(Rc::new(ReferenceTable::bundled().unwrap()));

    assert!(environment.units.define_ratio("fortnight", "ftn", "day", 14.0));
    assert!(!environment.units.define_ratio("fortnight", "ftn", "day", 14.0));

    let result = evaluate("1 fortnight in d", &mut environment).unwrap();
    assert_eq!(result.to_string(), "14 d");
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.ucal").expect("missing file");
    assert_success(&script);
}
