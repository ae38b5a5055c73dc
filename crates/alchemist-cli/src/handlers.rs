//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod convert;
mod registry;

pub use completions::handle_completions;
pub use convert::handle_convert;
pub use registry::{handle_check, handle_list};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::cli::OutputFormat;
    use crate::config::Config;
    use crate::output::OutputWriter;
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    pub struct Captured(Rc<RefCell<Vec<u8>>>);

    impl Captured {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub fn capture(format: OutputFormat, quiet: bool) -> (OutputWriter, Captured) {
        let captured = Captured::default();
        let output = OutputWriter::with_writer(format, false, quiet, Box::new(captured.clone()));
        (output, captured)
    }

    pub fn lenient() -> Config {
        Config::default()
    }
}
