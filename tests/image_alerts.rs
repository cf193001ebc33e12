//! Tests for the image-view variant.

mod common;

use common::*;
use crossterm::event::KeyCode;
use image::{DynamicImage, RgbaImage};

fn solid_image(width: u32, height: u32) -> DynamicImage {
    let mut img = RgbaImage::new(width, height);
    for pixel in img.pixels_mut() {
        *pixel = image::Rgba([10, 200, 30, 255]);
    }
    DynamicImage::ImageRgba8(img)
}

#[test]
fn image_dialog_exposes_view_and_actions() {
    let (mut session, surface) = hosted_session();
    session.present_image_view_alert(
        Some("Preview".into()),
        None,
        titles(&["Use", "Discard"]),
        None,
        vec![1],
        solid_image(8, 8),
        |_| {},
    );

    assert!(session.lifecycle().is_visible());
    let view = session.image_view().expect("image view missing");
    assert_eq!(view.width(), 8);
    assert_eq!(view.height(), 4);
    assert_eq!(session.actions().unwrap().len(), 2);
    assert_eq!(
        surface.events(),
        vec![SurfaceEvent::Attached(alertkit::DialogKind::Image)]
    );
}

#[test]
fn activation_closes_and_drops_the_view() {
    let (mut session, _surface) = hosted_session();
    let tapped = captured::<usize>();
    let tapped_in = tapped.clone();
    session.present_image_view_alert(
        None,
        None,
        titles(&["Use", "Discard"]),
        None,
        vec![1],
        solid_image(4, 4),
        move |index| {
            *tapped_in.lock() = Some(index);
        },
    );

    session.handle_key(press(KeyCode::Right));
    session.handle_key(press(KeyCode::Enter));

    assert_eq!(*tapped.lock(), Some(1));
    assert!(session.image_view().is_none());
    assert!(session.lifecycle().is_closed());
}
