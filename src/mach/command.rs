/// ## Device commands
///
/// Graphics statements are not rendered by the runtime. Their evaluated
/// arguments are handed to whoever drives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Screen(i32),
    Pset(i32, i32, Option<i32>),
    Color(i32, i32, i32),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Screen(..) => "SCREEN",
            Command::Pset(..) => "PSET",
            Command::Color(..) => "COLOR",
        }
    }

    pub fn args(&self) -> Vec<i32> {
        match *self {
            Command::Screen(mode) => vec![mode],
            Command::Pset(x, y, None) => vec![x, y],
            Command::Pset(x, y, Some(c)) => vec![x, y, c],
            Command::Color(fg, bg, border) => vec![fg, bg, border],
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let args: Vec<String> = self.args().iter().map(|n| n.to_string()).collect();
        write!(f, "{} {}", self.name(), args.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Command::Screen(1).to_string(), "SCREEN 1");
        assert_eq!(Command::Pset(3, -4, None).to_string(), "PSET 3,-4");
        assert_eq!(Command::Pset(3, 4, Some(2)).args(), vec![3, 4, 2]);
        assert_eq!(Command::Color(1, 2, 3).to_string(), "COLOR 1,2,3");
    }
}
