use basic::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
                s.push('\n');
            }
            Event::Device(command) => {
                s.push_str(&format!("<{}>\n", command));
            }
            Event::Trace(line_number) => {
                s.push_str(&format!("[{}]", line_number));
            }
        }
        prev_running = event == Event::Running;
    }
    s
}

/// Load and run a program, returning everything it printed.
pub fn run(source: &str) -> String {
    let mut r = Runtime::default();
    r.seed(1978);
    match r.load(source) {
        Ok(()) => exec(&mut r),
        Err(error) => format!("?{}\n", error),
    }
}
