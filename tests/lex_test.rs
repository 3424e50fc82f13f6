use basic::lang::{lex, token::*, ErrorCode};

fn kinds(s: &str) -> Vec<Kind> {
    lex(s).unwrap().into_iter().map(|t| t.kind).collect()
}

fn texts(s: &str) -> Vec<String> {
    lex(s).unwrap().into_iter().map(|t| t.content().to_string()).collect()
}

/// Tokens plus the spaces between them.
fn rebuild(s: &str) -> String {
    let mut out = String::new();
    for token in lex(s).unwrap() {
        out.push_str(&" ".repeat(token.col.start - out.len()));
        out.push_str(&token.text);
    }
    out.push_str(&" ".repeat(s.len() - out.len()));
    out
}

#[test]
fn test_scenario() {
    let s = "10 PRINT \"HI\"\n20 X=1\n30 PRINT X\n";
    assert_eq!(
        texts(s),
        vec!["10", "PRINT", "HI", "\n", "20", "X", "=", "1", "\n", "30", "PRINT", "X", "\n"]
    );
    assert_eq!(
        kinds(s),
        vec![
            Kind::Number,
            Kind::Word(Word::Print),
            Kind::String,
            Kind::Newline,
            Kind::Number,
            Kind::Ident,
            Kind::Operator(Operator::Equal),
            Kind::Number,
            Kind::Newline,
            Kind::Number,
            Kind::Word(Word::Print),
            Kind::Ident,
            Kind::Newline,
        ]
    );
}

#[test]
fn test_keywords_ignore_case() {
    assert_eq!(
        kinds("print Goto sCrEeN pset color int rnd"),
        vec![
            Kind::Word(Word::Print),
            Kind::Word(Word::Goto),
            Kind::Word(Word::Screen),
            Kind::Word(Word::Pset),
            Kind::Word(Word::Color),
            Kind::Word(Word::Int),
            Kind::Word(Word::Rnd),
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_eq!(kinds("PRINTER"), vec![Kind::Ident]);
    assert_eq!(kinds("INT2"), vec![Kind::Ident]);
    assert_eq!(texts("printer gotoX"), vec!["printer", "gotoX"]);
}

#[test]
fn test_identifier_keeps_case() {
    assert_eq!(texts("Abc1 aBC"), vec!["Abc1", "aBC"]);
}

#[test]
fn test_minus_is_operator() {
    assert_eq!(
        kinds("-12"),
        vec![Kind::Operator(Operator::Minus), Kind::Number]
    );
}

#[test]
fn test_symbols() {
    assert_eq!(
        kinds("=,()+-*/"),
        vec![
            Kind::Operator(Operator::Equal),
            Kind::Operator(Operator::Comma),
            Kind::LParen,
            Kind::RParen,
            Kind::Operator(Operator::Plus),
            Kind::Operator(Operator::Minus),
            Kind::Operator(Operator::Multiply),
            Kind::Operator(Operator::Divide),
        ]
    );
}

#[test]
fn test_string_has_no_escapes() {
    assert_eq!(texts(r#""A\" B"#), vec![r#"A\"#, "B"]);
}

#[test]
fn test_unterminated_string() {
    let e = lex("10 PRINT \"OOPS\n").unwrap_err();
    assert_eq!(e.code(), ErrorCode::UnterminatedString);
    assert_eq!(e.column(), 9..15);
}

#[test]
fn test_unrecognized_character() {
    let e = lex("10 X=1;").unwrap_err();
    assert_eq!(e.code(), ErrorCode::UnrecognizedCharacter);
    assert!(e.code().is_lexical());
    assert_eq!(e.to_string(), "UNRECOGNIZED CHARACTER IN (6..7); ';'");
    assert!(lex("10 X=\t1").is_err());
}

#[test]
fn test_round_trip() {
    for s in &[
        "10 PRINT \"HI\"\n20 X=1\n30 PRINT X\n",
        "  10   pset ( 1 , 2 ) , 3  \n",
        "5 A = INT(RND(10)) * 2 + Q\n\n99 GOTO 5",
        "10 PRINT \"  spaced  out  \"",
        "",
    ] {
        assert_eq!(&rebuild(s), s);
    }
}
