use std::path::Path;

use crate::command::Command;
use crate::dialogs::{Alert, Dialog, DialogKind};
use crate::error::{AppError, AppResult, Severity};
use crate::ops::Channel;
use crate::source::{self, CaptureDevice};
use crate::state::{Session, SessionState};

/// Wires user actions to the session, the pixel commands and the camera.
///
/// Every action either succeeds or leaves exactly one alert pending; the
/// session is never changed by a failed action.
#[derive(Debug)]
pub struct Controller {
    session: Session,
    camera: CaptureDevice,
    dialog: Option<Dialog>,
    alert: Option<Alert>,
}

impl Controller {
    pub fn new(camera: CaptureDevice) -> Self {
        Self {
            session: Session::new(),
            camera,
            dialog: None,
            alert: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut Dialog> {
        self.dialog.as_mut()
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// True while a dialog or message box blocks the main window
    pub fn is_modal_active(&self) -> bool {
        self.dialog.is_some() || self.alert.is_some()
    }

    pub fn camera_is_open(&self) -> bool {
        self.camera.is_open()
    }

    fn report(&mut self, error: AppError) {
        match error.severity() {
            Severity::Warning => log::warn!("{error}"),
            Severity::Error => log::error!("{error}"),
        }
        self.alert = Some(Alert::from(&error));
    }

    fn run(&mut self, action: impl FnOnce(&mut Self) -> AppResult<()>) -> bool {
        match action(self) {
            Ok(()) => true,
            Err(e) => {
                self.report(e);
                false
            }
        }
    }

    pub fn load_image(&mut self, path: &Path) -> bool {
        self.run(|this| {
            let image = source::load_from_file(path)?;
            log::info!("Loaded {} ({}x{})", path.display(), image.width(), image.height());
            this.session.set_source(image);
            Ok(())
        })
    }

    pub fn capture_image(&mut self) -> bool {
        self.run(|this| {
            let frame = this.camera.capture()?;
            this.session.set_source(frame);
            Ok(())
        })
    }

    pub fn show_image(&mut self) -> bool {
        self.run(|this| this.session.apply(&Command::ShowOriginal))
    }

    pub fn show_channel(&mut self, channel: Channel) -> bool {
        self.run(|this| this.session.apply(&Command::Isolate(channel)))
    }

    /// Opens a parameter dialog. Rejected with a warning if no image is loaded.
    pub fn open_dialog(&mut self, kind: DialogKind) -> bool {
        self.run(|this| {
            this.session.require_image()?;
            log::info!("Opened {:?} dialog", kind);
            this.dialog = Some(Dialog::new(kind));
            Ok(())
        })
    }

    /// Validates and applies the open dialog. On failure the dialog stays
    /// open with its fields intact so the user can correct them.
    pub fn submit_dialog(&mut self) -> bool {
        let Some(dialog) = &self.dialog else {
            return false;
        };
        let command = dialog.command();
        let applied = self.run(|this| {
            let command = command?;
            this.session.apply(&command)
        });
        if applied {
            if let Some(dialog) = self.dialog.take() {
                log::info!("Closed {:?} dialog", dialog.kind());
            }
        }
        applied
    }

    pub fn cancel_dialog(&mut self) {
        if let Some(dialog) = self.dialog.take() {
            log::info!("Cancelled {:?} dialog", dialog.kind());
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Releases the camera if it was ever opened. Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        self.camera.release();
    }
}
