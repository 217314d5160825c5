//! Immediate-mode GUI demo.
//!
//! Renders the fixed demo layout (a titled window holding a button, an
//! easy/hard radio pair, and a "Compression" integer property) into the
//! offscreen framebuffer every frame. Widget state that survives between
//! frames (selected option, property value, pointer position) lives in
//! [`DemoUi`]; everything else is recomputed per frame.
//!
//! The pointer is driven from the RetroPad: the d-pad moves it, B clicks.

use crate::fb::{rgb, Framebuffer};

const WINDOW_X: i32 = 50;
const WINDOW_Y: i32 = 50;
const WINDOW_W: u32 = 200;
const WINDOW_H: u32 = 200;
const TITLE_H: i32 = 24;
const PADDING: i32 = 8;
const SPACING: i32 = 4;

const CLEAR: u32 = rgb(30, 30, 30);
const WINDOW_BG: u32 = rgb(45, 45, 45);
const TITLE_BG: u32 = rgb(38, 38, 38);
const BORDER: u32 = rgb(65, 65, 65);
const WIDGET_BG: u32 = rgb(56, 56, 56);
const WIDGET_HOT: u32 = rgb(75, 75, 75);
const ACCENT: u32 = rgb(70, 130, 180);
const TEXT: u32 = rgb(210, 210, 210);
const POINTER: u32 = rgb(240, 240, 240);

const PROPERTY_MIN: i32 = 0;
const PROPERTY_MAX: i32 = 100;
const PROPERTY_STEP: i32 = 10;
const POINTER_SPEED: i32 = 6;
const ARROW_ZONE: i32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Easy,
    Hard,
}

pub struct DemoUi {
    screen_w: u32,
    screen_h: u32,
    pointer: (i32, i32),
    click: bool,
    held: bool,
    choice: Choice,
    compression: i32,
}

impl DemoUi {
    pub fn new(screen_w: u32, screen_h: u32) -> Self {
        Self {
            screen_w,
            screen_h,
            pointer: (screen_w as i32 / 2, screen_h as i32 / 2),
            click: false,
            held: false,
            choice: Choice::Easy,
            compression: 20,
        }
    }

    /// Feeds this frame's pad state: d-pad directions move the pointer,
    /// `press` clicks. A click fires on the press edge only, so holding B
    /// does not repeat.
    pub fn steer(&mut self, up: bool, down: bool, left: bool, right: bool, press: bool) {
        let (ref mut x, ref mut y) = self.pointer;
        if left {
            *x -= POINTER_SPEED;
        }
        if right {
            *x += POINTER_SPEED;
        }
        if up {
            *y -= POINTER_SPEED;
        }
        if down {
            *y += POINTER_SPEED;
        }
        *x = (*x).clamp(0, self.screen_w as i32 - 1);
        *y = (*y).clamp(0, self.screen_h as i32 - 1);

        self.click = press && !self.held;
        self.held = press;
    }

    /// Lays out and draws one GUI frame, applying any pending click.
    pub fn frame(&mut self, fb: &mut Framebuffer) {
        fb.clear(CLEAR);

        // Window chrome.
        fb.fill_rect(WINDOW_X, WINDOW_Y, WINDOW_W, WINDOW_H, WINDOW_BG);
        fb.fill_rect(WINDOW_X, WINDOW_Y, WINDOW_W, TITLE_H as u32, TITLE_BG);
        fb.draw_rect(WINDOW_X, WINDOW_Y, WINDOW_W, WINDOW_H, BORDER);
        fb.draw_text(
            WINDOW_X + PADDING,
            WINDOW_Y + (TITLE_H - Framebuffer::text_height() as i32) / 2,
            "Demo",
            TEXT,
            None,
        );

        let inner_x = WINDOW_X + PADDING;
        let inner_w = WINDOW_W as i32 - 2 * PADDING;
        let mut cy = WINDOW_Y + TITLE_H + PADDING;

        if self.button(fb, inner_x, cy, 80, 30, "button") {
            log::info!("button pressed");
        }
        cy += 30 + SPACING;

        let cell_w = ((inner_w - SPACING) / 2) as u32;
        if self.radio(fb, inner_x, cy, cell_w, 30, "easy", self.choice == Choice::Easy) {
            self.choice = Choice::Easy;
        }
        let hard_x = inner_x + cell_w as i32 + SPACING;
        if self.radio(fb, hard_x, cy, cell_w, 30, "hard", self.choice == Choice::Hard) {
            self.choice = Choice::Hard;
        }
        cy += 30 + SPACING;

        self.property(fb, inner_x, cy, inner_w as u32, 25);

        self.draw_pointer(fb);
        self.click = false;
    }

    pub fn choice(&self) -> Choice {
        self.choice
    }

    pub fn compression(&self) -> i32 {
        self.compression
    }

    pub fn pointer(&self) -> (i32, i32) {
        self.pointer
    }

    fn hovered(&self, x: i32, y: i32, w: u32, h: u32) -> bool {
        let (px, py) = self.pointer;
        px >= x && px < x + w as i32 && py >= y && py < y + h as i32
    }

    fn clicked(&self, x: i32, y: i32, w: u32, h: u32) -> bool {
        self.click && self.hovered(x, y, w, h)
    }

    fn button(&self, fb: &mut Framebuffer, x: i32, y: i32, w: u32, h: u32, label: &str) -> bool {
        let bg = if self.hovered(x, y, w, h) {
            WIDGET_HOT
        } else {
            WIDGET_BG
        };
        fb.fill_rect(x, y, w, h, bg);
        fb.draw_rect(x, y, w, h, BORDER);
        fb.draw_text(
            x + (w as i32 - Framebuffer::text_width(label) as i32) / 2,
            y + (h as i32 - Framebuffer::text_height() as i32) / 2,
            label,
            TEXT,
            None,
        );
        self.clicked(x, y, w, h)
    }

    fn radio(
        &self,
        fb: &mut Framebuffer,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        label: &str,
        selected: bool,
    ) -> bool {
        let knob = 10;
        let ky = y + (h as i32 - knob) / 2;
        fb.draw_rect(x, ky, knob as u32, knob as u32, BORDER);
        if selected {
            fb.fill_rect(x + 3, ky + 3, knob as u32 - 6, knob as u32 - 6, ACCENT);
        }
        fb.draw_text(
            x + knob + 6,
            y + (h as i32 - Framebuffer::text_height() as i32) / 2,
            label,
            TEXT,
            None,
        );
        self.clicked(x, y, w, h)
    }

    /// Integer property row; the arrows at either end step the value.
    fn property(&mut self, fb: &mut Framebuffer, x: i32, y: i32, w: u32, h: u32) {
        if self.clicked(x, y, ARROW_ZONE as u32, h) {
            self.compression = (self.compression - PROPERTY_STEP).max(PROPERTY_MIN);
        }
        if self.clicked(x + w as i32 - ARROW_ZONE, y, ARROW_ZONE as u32, h) {
            self.compression = (self.compression + PROPERTY_STEP).min(PROPERTY_MAX);
        }

        let bg = if self.hovered(x, y, w, h) {
            WIDGET_HOT
        } else {
            WIDGET_BG
        };
        fb.fill_rect(x, y, w, h, bg);
        fb.draw_rect(x, y, w, h, BORDER);

        let ty = y + (h as i32 - Framebuffer::text_height() as i32) / 2;
        fb.draw_text(x + 4, ty, "<", TEXT, None);
        fb.draw_text(x + w as i32 - 12, ty, ">", TEXT, None);

        let label = format!("Compression: {}", self.compression);
        fb.draw_text(
            x + (w as i32 - Framebuffer::text_width(&label) as i32) / 2,
            ty,
            &label,
            TEXT,
            None,
        );
    }

    fn draw_pointer(&self, fb: &mut Framebuffer) {
        let (x, y) = self.pointer;
        fb.fill_rect(x - 4, y, 9, 1, POINTER);
        fb.fill_rect(x, y - 4, 1, 9, POINTER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui_and_fb() -> (DemoUi, Framebuffer) {
        (DemoUi::new(1280, 720), Framebuffer::new(1280, 720).unwrap())
    }

    fn warp(ui: &mut DemoUi, x: i32, y: i32) {
        // Drive the pointer by steering; speed is constant, so loop.
        while ui.pointer().0 > x {
            ui.steer(false, false, true, false, false);
        }
        while ui.pointer().0 < x {
            ui.steer(false, false, false, true, false);
        }
        while ui.pointer().1 > y {
            ui.steer(true, false, false, false, false);
        }
        while ui.pointer().1 < y {
            ui.steer(false, true, false, false, false);
        }
    }

    #[test]
    fn starts_with_demo_defaults() {
        let (ui, _) = ui_and_fb();
        assert_eq!(ui.choice(), Choice::Easy);
        assert_eq!(ui.compression(), 20);
    }

    #[test]
    fn pointer_clamps_to_screen() {
        let mut ui = DemoUi::new(100, 100);
        for _ in 0..50 {
            ui.steer(true, false, true, false, false);
        }
        assert_eq!(ui.pointer(), (0, 0));
        for _ in 0..50 {
            ui.steer(false, true, false, true, false);
        }
        assert_eq!(ui.pointer(), (99, 99));
    }

    #[test]
    fn clicking_hard_radio_switches_choice() {
        let (mut ui, mut fb) = ui_and_fb();
        // Second layout row starts under the title bar, first row, and
        // spacing: y = 50 + 24 + 8 + 30 + 4. "hard" occupies the right cell.
        warp(&mut ui, 160, 125);
        ui.steer(false, false, false, false, true);
        ui.frame(&mut fb);
        assert_eq!(ui.choice(), Choice::Hard);

        // Drag over to "easy" with B still held: no new press edge, no click.
        while ui.pointer().0 > 60 {
            ui.steer(false, false, true, false, true);
        }
        ui.frame(&mut fb);
        assert_eq!(ui.choice(), Choice::Hard);

        // Release and press again over "easy": switches back.
        ui.steer(false, false, false, false, false);
        ui.steer(false, false, false, false, true);
        ui.frame(&mut fb);
        assert_eq!(ui.choice(), Choice::Easy);
    }

    #[test]
    fn property_arrows_step_and_clamp() {
        let (mut ui, mut fb) = ui_and_fb();
        // Third layout row: y = 50 + 24 + 8 + 30 + 4 + 30 + 4 = 150.
        warp(&mut ui, 60, 160);
        for _ in 0..5 {
            ui.steer(false, false, false, false, true);
            ui.frame(&mut fb);
            ui.steer(false, false, false, false, false);
        }
        assert_eq!(ui.compression(), 0, "must clamp at the minimum");

        warp(&mut ui, 230, 160);
        for _ in 0..12 {
            ui.steer(false, false, false, false, true);
            ui.frame(&mut fb);
            ui.steer(false, false, false, false, false);
        }
        assert_eq!(ui.compression(), 100, "must clamp at the maximum");
    }

    #[test]
    fn frame_paints_window_chrome() {
        let (mut ui, mut fb) = ui_and_fb();
        ui.frame(&mut fb);
        assert_eq!(fb.pixel(0, 0), Some(CLEAR));
        assert_eq!(fb.pixel(WINDOW_X, WINDOW_Y), Some(BORDER));
        assert_eq!(fb.pixel(WINDOW_X + 5, WINDOW_Y + 5), Some(TITLE_BG));
    }
}
