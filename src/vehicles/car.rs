use crate::{console::Console, error::Result};

#[derive(Debug, Clone, Default)]
pub struct Car {
    console: Console,
}

impl Car {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_console(console: Console) -> Self {
        Self { console }
    }

    pub fn drive(&self) -> Result<()> {
        self.console.line("The car is driving.")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_prints_one_line() {
        let console = Console::capture();
        Car::with_console(console.clone()).drive().unwrap();
        assert_eq!(console.lines(), vec!["The car is driving."]);
    }

    #[test]
    fn new_writes_to_stdout() {
        assert!(Car::new().drive().is_ok());
    }
}
