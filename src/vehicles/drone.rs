use crate::{console::Console, error::Result};

#[derive(Debug, Clone, Default)]
pub struct Drone {
    console: Console,
}

impl Drone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_console(console: Console) -> Self {
        Self { console }
    }

    pub fn fly(&self) -> Result<()> {
        self.console.line("The drone is flying.")?;
        Ok(())
    }
}
