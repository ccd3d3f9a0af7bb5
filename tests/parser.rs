use capuchin::{
    ast::{Expression, InfixOperator, LiteralValue, PrefixOperator, Program, Statement},
    parse,
};

fn parse_ok(source: &str) -> Program {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected parse errors for {source:?}: {errors:?}");
    program
}

fn parse_errors(source: &str) -> Vec<String> {
    let (_, errors) = parse(source);
    errors.iter().map(ToString::to_string).collect()
}

fn integer(value: i64) -> Expression {
    Expression::Literal { value: LiteralValue::Integer(value) }
}

#[test]
fn let_statements() {
    let program = parse_ok("let x = 5; let y = true; let foobar = y;");

    assert_eq!(program.statements.len(), 3);
    assert_eq!(program.statements[0],
               Statement::Let { name:  "x".to_string(),
                                value: integer(5), });
    assert_eq!(program.statements[1],
               Statement::Let { name:  "y".to_string(),
                                value: Expression::Literal { value: LiteralValue::Bool(true) }, });
    assert_eq!(program.statements[2],
               Statement::Let { name:  "foobar".to_string(),
                                value: Expression::Identifier { name: "y".to_string() }, });
}

#[test]
fn return_statements() {
    let program = parse_ok("return 5; return x;");

    assert_eq!(program.statements,
               vec![Statement::Return { value: integer(5) },
                    Statement::Return { value: Expression::Identifier { name: "x".to_string() } }]);
}

#[test]
fn prefix_expressions() {
    let program = parse_ok("!5; -15;");

    assert_eq!(program.statements,
               vec![Statement::Expression { expression:
                        Expression::Prefix { op:    PrefixOperator::Not,
                                             right: Box::new(integer(5)), } },
                    Statement::Expression { expression:
                        Expression::Prefix { op:    PrefixOperator::Negate,
                                             right: Box::new(integer(15)), } }]);
}

#[test]
fn infix_expressions() {
    let operators = [("+", InfixOperator::Add),
                     ("-", InfixOperator::Sub),
                     ("*", InfixOperator::Mul),
                     ("/", InfixOperator::Div),
                     ("<", InfixOperator::LessThan),
                     (">", InfixOperator::GreaterThan),
                     ("==", InfixOperator::Equal),
                     ("!=", InfixOperator::NotEqual)];

    for (text, op) in operators {
        let program = parse_ok(&format!("5 {text} 7;"));

        assert_eq!(program.statements,
                   vec![Statement::Expression { expression:
                            Expression::Infix { left:  Box::new(integer(5)),
                                                op,
                                                right: Box::new(integer(7)), } }],
                   "operator {text}");
    }
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("false", "false"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("3 < 5 == true", "((3 < 5) == true)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (source, want) in cases {
        assert_eq!(parse_ok(source).to_string(), want, "source {source:?}");
    }
}

#[test]
fn if_expression() {
    let program = parse_ok("if (x < y) { x }");

    let Statement::Expression { expression: Expression::If { condition,
                                                             consequence,
                                                             alternative, }, } =
        &program.statements[0]
    else {
        panic!("expected an if expression, got {:?}", program.statements[0]);
    };

    assert_eq!(condition.to_string(), "(x < y)");
    assert_eq!(consequence.to_string(), "x");
    assert!(alternative.is_none());
}

#[test]
fn if_else_expression() {
    let program = parse_ok("if (x < y) { x } else { y }");

    assert_eq!(program.to_string(), "if (x < y) x else y");
}

#[test]
fn function_literal() {
    let program = parse_ok("fn(x, y) { x + y; }");

    let Statement::Expression { expression: Expression::Function { parameters, body } } =
        &program.statements[0]
    else {
        panic!("expected a function literal, got {:?}", program.statements[0]);
    };

    assert_eq!(parameters, &["x", "y"]);
    assert_eq!(body.to_string(), "(x + y)");
}

#[test]
fn function_parameters() {
    let cases: [(&str, &[&str]); 3] =
        [("fn() {};", &[]), ("fn(x) {};", &["x"]), ("fn(x, y, z) {};", &["x", "y", "z"])];

    for (source, want) in cases {
        let program = parse_ok(source);

        let Statement::Expression { expression: Expression::Function { parameters, .. } } =
            &program.statements[0]
        else {
            panic!("expected a function literal, got {:?}", program.statements[0]);
        };

        assert_eq!(parameters, want, "source {source:?}");
    }
}

#[test]
fn call_expression() {
    let program = parse_ok("add(1, 2 * 3, 4 + 5);");

    assert_eq!(program.to_string(), "add(1, (2 * 3), (4 + 5))");
}

#[test]
fn string_literal_expression() {
    let program = parse_ok("\"hello world\";");

    assert_eq!(program.statements,
               vec![Statement::Expression { expression: Expression::Literal { value:
                        LiteralValue::Str("hello world".to_string()), } }]);
}

#[test]
fn array_literal() {
    let program = parse_ok("[1, 2 * 2, 3 + 3]");

    assert_eq!(program.to_string(), "[1, (2 * 2), (3 + 3)]");
}

#[test]
fn empty_array_literal() {
    let program = parse_ok("[]");

    assert_eq!(program.statements,
               vec![Statement::Expression { expression: Expression::Array { elements: vec![] } }]);
}

#[test]
fn index_expression() {
    let program = parse_ok("myArray[1 + 1]");

    assert_eq!(program.to_string(), "(myArray[(1 + 1)])");
}

#[test]
fn hash_literal_with_string_keys() {
    let program = parse_ok("{\"one\": 1, \"two\": 2, \"three\": 3}");

    let Statement::Expression { expression: Expression::Hash { pairs } } = &program.statements[0]
    else {
        panic!("expected a hash literal, got {:?}", program.statements[0]);
    };

    let pairs: Vec<(String, String)> = pairs.iter()
                                            .map(|(k, v)| (k.to_string(), v.to_string()))
                                            .collect();

    assert_eq!(pairs,
               vec![("one".to_string(), "1".to_string()),
                    ("two".to_string(), "2".to_string()),
                    ("three".to_string(), "3".to_string())]);
}

#[test]
fn hash_literal_with_expression_values() {
    let program = parse_ok("{\"one\": 0 + 1, \"two\": 10 - 8, \"three\": 15 / 5}");

    assert_eq!(program.to_string(), "{one:(0 + 1), two:(10 - 8), three:(15 / 5)}");
}

#[test]
fn empty_hash_literal() {
    let program = parse_ok("{}");

    assert_eq!(program.statements,
               vec![Statement::Expression { expression: Expression::Hash { pairs: vec![] } }]);
}

#[test]
fn errors_accumulate_without_aborting() {
    let (program, _) = parse("let x 5; let = 10; let 838383;");

    assert_eq!(parse_errors("let x 5; let = 10; let 838383;"),
               vec!["expected next token to be =, got INT instead",
                    "expected next token to be IDENT, got = instead",
                    "no prefix parse function for = found",
                    "expected next token to be IDENT, got INT instead"]);

    // The recoverable pieces still parse.
    assert!(!program.statements.is_empty());
}

#[test]
fn missing_closing_paren_is_reported() {
    assert_eq!(parse_errors("(1 + 2"),
               vec!["expected next token to be ), got EOF instead"]);
}

#[test]
fn no_prefix_parse_function_error() {
    assert_eq!(parse_errors(")"), vec!["no prefix parse function for ) found"]);
}

#[test]
fn integer_literal_overflow_is_reported() {
    assert_eq!(parse_errors("92233720368547758079"),
               vec!["could not parse \"92233720368547758079\" as integer"]);
}

// Reparsing the canonical printed form is stable at the expression level:
// the second parse yields the same tree and the same print. Blocks print
// without their braces, so `if` and `fn` bodies are out of scope here.
#[test]
fn printed_programs_reparse_to_the_same_tree() {
    let sources = ["let x = 5;",
                   "return (1 + 2) * 3;",
                   "let y = a + b * c;",
                   "[1, 2 * 2][1]",
                   "{1:true, 2:false}[2]",
                   "add(1, (2 + 3) * 4);"];

    for source in sources {
        let first = parse_ok(source);
        let printed = first.to_string();
        let second = parse_ok(&printed);

        assert_eq!(second, first, "source {source:?}");
        assert_eq!(second.to_string(), printed, "source {source:?}");
    }
}
