use std::cell::Cell;
use std::rc::Rc;

use image::{Rgb, RgbImage};
use image_lab::controller::Controller;
use image_lab::dialogs::{Dialog, DialogKind};
use image_lab::error::{AppError, AppResult, Severity};
use image_lab::ops::Channel;
use image_lab::source::{CaptureDevice, FrameGrabber};
use image_lab::state::SessionState;

#[derive(Default)]
struct CameraLog {
    opened: Cell<u32>,
    released: Cell<u32>,
    fail_reads: Cell<bool>,
}

struct FakeCamera(Rc<CameraLog>);

impl FrameGrabber for FakeCamera {
    fn grab(&mut self) -> AppResult<RgbImage> {
        if self.0.fail_reads.get() {
            return Err(AppError::FrameReadFailure("no frame".into()));
        }
        Ok(RgbImage::from_pixel(100, 100, Rgb([255, 0, 0])))
    }

    fn release(&mut self) {
        self.0.released.set(self.0.released.get() + 1);
    }
}

// Helper to create a controller backed by a fake camera
fn create_controller() -> (Controller, Rc<CameraLog>) {
    let log = Rc::new(CameraLog::default());
    let shared = Rc::clone(&log);
    let camera = CaptureDevice::new(
        0,
        Box::new(move |_| {
            shared.opened.set(shared.opened.get() + 1);
            Ok(Box::new(FakeCamera(Rc::clone(&shared))) as Box<dyn FrameGrabber>)
        }),
    );
    (Controller::new(camera), log)
}

// Helper to create a controller with a captured image already loaded
fn create_loaded_controller() -> (Controller, Rc<CameraLog>) {
    let (mut controller, log) = create_controller();
    assert!(controller.capture_image());
    (controller, log)
}

fn set_dialog_fields(controller: &mut Controller, fields: &[&str]) {
    match controller.dialog_mut().expect("dialog should be open") {
        Dialog::Resize(form) => {
            form.width = fields[0].into();
            form.height = fields[1].into();
        }
        Dialog::Brightness(form) => form.value = fields[0].into(),
        Dialog::Line(form) => {
            form.x1 = fields[0].into();
            form.y1 = fields[1].into();
            form.x2 = fields[2].into();
            form.y2 = fields[3].into();
            form.thickness = fields[4].into();
        }
    }
}

#[test]
fn test_operations_without_image_warn_and_keep_state() {
    let (mut controller, _) = create_controller();

    assert!(!controller.show_image());
    assert_eq!(controller.alert().unwrap().severity, Severity::Warning);
    controller.dismiss_alert();

    assert!(!controller.show_channel(Channel::Green));
    assert!(controller.alert().is_some());
    controller.dismiss_alert();

    for kind in [DialogKind::Resize, DialogKind::Brightness, DialogKind::Line] {
        assert!(!controller.open_dialog(kind));
        assert!(controller.dialog().is_none());
        controller.dismiss_alert();
    }

    assert_eq!(controller.state(), SessionState::NoImage);
    assert!(controller.session().display().is_none());
}

#[test]
fn test_capture_loads_source_and_display() {
    let (mut controller, log) = create_controller();

    assert!(controller.capture_image());
    assert!(controller.capture_image());

    assert_eq!(controller.state(), SessionState::ImageLoaded);
    assert_eq!(controller.session().source(), controller.session().display());
    assert_eq!(log.opened.get(), 1);
    assert!(controller.camera_is_open());
}

#[test]
fn test_failed_frame_read_keeps_previous_image() {
    let (mut controller, log) = create_loaded_controller();
    controller.show_channel(Channel::Green);
    let revision = controller.session().revision();

    log.fail_reads.set(true);
    assert!(!controller.capture_image());

    let alert = controller.alert().unwrap();
    assert_eq!(alert.severity, Severity::Error);
    assert_eq!(controller.session().revision(), revision);
    assert!(controller.camera_is_open());
}

#[test]
fn test_show_channel_then_show_image_restores_source() {
    let (mut controller, _) = create_loaded_controller();

    controller.show_channel(Channel::Blue);
    let display = controller.session().display().unwrap();
    assert!(display.pixels().all(|p| *p == Rgb([0, 0, 0])));

    controller.show_image();
    assert_eq!(controller.session().display(), controller.session().source());
}

#[test]
fn test_invalid_dialog_input_keeps_dialog_open() {
    let (mut controller, _) = create_loaded_controller();
    assert!(controller.open_dialog(DialogKind::Resize));

    set_dialog_fields(&mut controller, &["-5", "10"]);
    assert!(!controller.submit_dialog());

    assert!(controller.dialog().is_some());
    assert!(controller.is_modal_active());
    let alert = controller.alert().unwrap();
    assert_eq!(alert.severity, Severity::Error);
    assert!(alert.message.starts_with("Invalid input"));
    assert_eq!(controller.session().display().unwrap().dimensions(), (100, 100));

    // Correct the input and apply again.
    controller.dismiss_alert();
    set_dialog_fields(&mut controller, &["50", "20"]);
    assert!(controller.submit_dialog());
    assert!(controller.dialog().is_none());
    assert!(!controller.is_modal_active());
    assert_eq!(controller.session().display().unwrap().dimensions(), (50, 20));
}

#[test]
fn test_non_numeric_brightness_is_rejected() {
    let (mut controller, _) = create_loaded_controller();
    controller.open_dialog(DialogKind::Brightness);
    set_dialog_fields(&mut controller, &["bright"]);

    assert!(!controller.submit_dialog());
    assert!(controller.alert().unwrap().message.contains("Brightness"));
}

#[test]
fn test_cancel_leaves_state_unchanged() {
    let (mut controller, _) = create_loaded_controller();
    let revision = controller.session().revision();

    controller.open_dialog(DialogKind::Line);
    set_dialog_fields(&mut controller, &["0", "0", "99", "99", "3"]);
    controller.cancel_dialog();

    assert!(controller.dialog().is_none());
    assert_eq!(controller.session().revision(), revision);
}

#[test]
fn test_operations_start_from_source() {
    let (mut controller, _) = create_loaded_controller();

    controller.open_dialog(DialogKind::Line);
    set_dialog_fields(&mut controller, &["0", "50", "99", "50", "1"]);
    assert!(controller.submit_dialog());

    controller.open_dialog(DialogKind::Brightness);
    set_dialog_fields(&mut controller, &["0"]);
    assert!(controller.submit_dialog());

    // The line is gone: brightness ran on the captured frame.
    let display = controller.session().display().unwrap();
    assert_eq!(*display.get_pixel(50, 50), Rgb([255, 0, 0]));
    assert_eq!(*controller.session().source().unwrap().get_pixel(50, 50), Rgb([255, 0, 0]));
}

#[test]
fn test_shutdown_releases_camera_once() {
    let (mut controller, log) = create_loaded_controller();
    controller.shutdown();
    controller.shutdown();
    drop(controller);
    assert_eq!(log.released.get(), 1);
}

#[test]
fn test_shutdown_without_capture_releases_nothing() {
    let (mut controller, log) = create_controller();
    controller.shutdown();
    assert_eq!(log.opened.get(), 0);
    assert_eq!(log.released.get(), 0);
}
