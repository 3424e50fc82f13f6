use crate::mach::{Event, Runtime};

mod goto_test;

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => break,
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
