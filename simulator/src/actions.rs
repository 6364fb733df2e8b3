//! Reboot action. The simulator never restarts the host; it logs the request
//! instead.

use log::warn;
use statpanel_common::{PanelError, RebootAction};

#[derive(Default)]
pub struct LoggedReboot {
    requests: u32,
}

impl RebootAction for LoggedReboot {
    fn execute(&mut self) -> Result<(), PanelError> {
        self.requests += 1;
        warn!("reboot requested (#{}), ignored in simulator", self.requests);
        Ok(())
    }
}
