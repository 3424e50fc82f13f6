use super::*;

fn load(source: &str) -> Runtime {
    let mut r = Runtime::default();
    if let Err(e) = r.load(source) {
        panic!("{}", e);
    }
    r
}

#[test]
fn test_goto_ignores_declared_order() {
    let mut r = load("30 PRINT \"C\"\n10 GOTO 5\n20 PRINT \"B\"\n5 PRINT \"A\"\n");
    assert_eq!(run(&mut r), "C\nA\n");
}

#[test]
fn test_goto_lands_on_target_position() {
    let mut r = load("10 GOTO 30\n20 PRINT \"SKIPPED\"\n30 PRINT \"HERE\"\n");
    assert_eq!(run(&mut r), "HERE\n");
    assert_eq!(r.pc(), 3);
}

#[test]
fn test_goto_missing_line_falls_through() {
    let mut r = load("10 GOTO 99\n20 PRINT \"NEXT\"\n");
    assert_eq!(run(&mut r), "NEXT\n");
}

#[test]
fn test_goto_missing_line_strict() {
    let mut r = Runtime::default();
    r.strict_goto(true);
    r.load("10 GOTO 99\n20 PRINT \"NEXT\"\n").unwrap();
    assert_eq!(run(&mut r), "?UNDEFINED LINE IN 10 (3..7); 99\n");
}

#[test]
fn test_goto_duplicate_target_takes_first() {
    let mut r = load("10 PRINT \"ONE\"\n20 GOTO 40\n10 PRINT \"TWO\"\n40 GOTO 10\n");
    for _ in 0..3 {
        assert_eq!(r.execute(10), Event::Print("ONE".to_string()));
    }
}

#[test]
fn test_infinite_loop_is_bounded_by_caller() {
    let mut r = load("10 GOTO 10\n");
    assert_eq!(run_cycles(&mut r, 100), "\n100 Execution cycles exceeded.\n");
    assert!(r.is_running());
    r.interrupt();
    assert_eq!(run(&mut r), "?BREAK IN 10\n");
    assert!(!r.is_running());
}

#[test]
fn test_trace() {
    let mut r = load("10 GOTO 30\n20 PRINT 2\n30 PRINT 3\n");
    r.tron(true);
    assert_eq!(run(&mut r), "[10][30]3\n");
}
