//! Fixed UI screens
//!
//! Each function fills a `Screen` with one of the device's views. Text
//! longer than a row is cut by the screen.

use heapless::String;

use super::screen::{display_char, Screen, LINE_LEN};

pub fn boot(screen: &mut Screen) {
    screen.set("Li-Fi System", "Initializing...");
}

/// Pairing hint shown once the wireless module is up
pub fn pairing(screen: &mut Screen, device_name: &str) {
    let mut top: String<LINE_LEN> = String::new();
    let _ = top.push_str("BT: ");
    push_truncated(&mut top, device_name);
    screen.set(&top, "Pair & Connect!");
}

pub fn receive_idle(screen: &mut Screen) {
    screen.set("Mode: RECEIVE", "Waiting...");
}

/// Shown when SEND mode is entered
pub fn send_entered(screen: &mut Screen, connected: bool) {
    let hint = if connected { "BT Ready!" } else { "Connect BT app" };
    screen.set("Mode: SEND", hint);
}

pub fn send_ready(screen: &mut Screen) {
    screen.set("Mode: SEND", "Ready for data");
}

/// Shown when the wireless link comes up
pub fn link_up(screen: &mut Screen, sending: bool) {
    let hint = if sending { "Type to send" } else { "Mode: RECEIVE" };
    screen.set("BT Connected!", hint);
}

pub fn link_down(screen: &mut Screen) {
    screen.set("BT Disconnected", "Waiting...");
}

pub fn receiving(screen: &mut Screen) {
    screen.set("Receiving data..", "");
}

/// Received message view; `text` is the message or a ticker window
pub fn received(screen: &mut Screen, text: &str) {
    screen.set("Received Msg:", text);
}

/// Start of a transmission
pub fn transmitting(screen: &mut Screen) {
    screen.set("Transmitting...", "");
}

/// Echo character `index` of the message being sent
///
/// Only the first row's worth of characters is echoed.
pub fn transmit_char(screen: &mut Screen, index: usize, ch: char) {
    if index >= LINE_LEN {
        return;
    }
    let mut line: String<LINE_LEN> = String::new();
    push_truncated(&mut line, screen.line(1).unwrap_or(""));
    let _ = line.push(display_char(ch));
    screen.set_line(1, &line);
}

/// Summary after a transmission, previewing up to `preview_len` characters
pub fn transmit_complete(screen: &mut Screen, message: &str, preview_len: usize) {
    let mut bottom: String<LINE_LEN> = String::new();
    let _ = bottom.push_str("Sent: ");
    for ch in message.chars().take(preview_len) {
        if bottom.push(display_char(ch)).is_err() {
            break;
        }
    }
    screen.set("TX Complete!", &bottom);
}

fn push_truncated(line: &mut String<LINE_LEN>, text: &str) {
    for ch in text.chars() {
        if line.push(display_char(ch)).is_err() {
            break;
        }
    }
}
