//! GameView: maps a [`RoundSnapshot`] plus HUD state into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::RoundSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::hud::Hud;
use crate::types::{CellView, Fruit, Phase, Severity, LEVEL_COUNT};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const MUTED: Rgb = Rgb::new(110, 110, 120);
const WARNING: Rgb = Rgb::new(240, 80, 80);
const MATCHED_BG: Rgb = Rgb::new(40, 120, 60);
const SELECTED_BG: Rgb = Rgb::new(150, 120, 30);

/// Rows above the board frame: title, status, sequence, spacer.
const HEADER_ROWS: u16 = 4;
/// Rows below the board frame: spacer, message, help.
const FOOTER_ROWS: u16 = 3;

const HELP: &str = "arrows move  enter view  space verify  s start  p pause  r reset  c custom  m main  q quit";

/// Terminal renderer for the fruit board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two label columns plus one column of padding each side.
        Self {
            cell_w: 4,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `cursor` is the `(row, col)` of the keyboard cursor, if shown.
    pub fn render_into(
        &self,
        snap: &RoundSnapshot,
        hud: &Hud,
        cursor: Option<(usize, usize)>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let size = snap.board_size as u16;
        let frame_w = size * self.cell_w + 2;
        let frame_h = size + 2;
        let total_h = HEADER_ROWS + frame_h + FOOTER_ROWS;

        let left = viewport.width.saturating_sub(frame_w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        let board_y = top + HEADER_ROWS;

        self.draw_title(fb, snap, viewport, top);
        self.draw_status(fb, snap, viewport, top + 1);
        self.draw_sequence(fb, snap, viewport, top + 2);

        fb.draw_frame(left, board_y, frame_w, frame_h, CellStyle::fg(TEXT));
        for row in 0..snap.board_size as usize {
            for col in 0..snap.board_size as usize {
                let Some(view) = snap.cell(row, col) else {
                    continue;
                };
                let index = row * snap.board_size as usize + col;
                let x = left + 1 + col as u16 * self.cell_w;
                let y = board_y + 1 + row as u16;
                let style = cell_style(view, snap.is_selected(index), cursor == Some((row, col)));
                self.draw_cell(fb, x, y, view, style);
            }
        }

        if let Some(text) = overlay_text(snap, hud) {
            let mid = board_y + frame_h / 2;
            let pad = text.chars().count() as u16 + 2;
            let x = left + frame_w.saturating_sub(pad) / 2;
            let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
            fb.fill_rect(x, mid, pad, 1, ' ', style);
            fb.put_str_centered(left, frame_w, mid, text, style);
        }

        let footer_y = board_y + frame_h + 1;
        if let Some((text, severity)) = hud.message() {
            fb.put_str_centered(0, viewport.width, footer_y, text, severity_style(severity));
        }
        fb.put_str_centered(0, viewport.width, footer_y + 1, HELP, CellStyle::fg(MUTED).dim());
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &RoundSnapshot,
        hud: &Hud,
        cursor: Option<(usize, usize)>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, cursor, viewport, &mut fb);
        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer, snap: &RoundSnapshot, viewport: Viewport, y: u16) {
        let title = if snap.custom_mode {
            "FRUIT MEMORY - CUSTOM"
        } else {
            "FRUIT MEMORY"
        };
        fb.put_str_centered(0, viewport.width, y, title, CellStyle::fg(TEXT).bold());
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &RoundSnapshot, viewport: Viewport, y: u16) {
        // "LEVEL 1/4  TIME 01:00  FOUND 0/2  ERRORS 0"
        let width = 40;
        let label = CellStyle::fg(MUTED);
        let value = CellStyle::fg(TEXT).bold();
        let mut x = viewport.width.saturating_sub(width) / 2;

        x = fb.put_str(x, y, "LEVEL ", label);
        x = fb.put_u32(x, y, snap.level, value);
        x = fb.put_str(x, y, "/", value);
        x = fb.put_u32(x, y, LEVEL_COUNT as u32, value);

        x = fb.put_str(x, y, "  TIME ", label);
        let time_style = if snap.warning {
            CellStyle::fg(WARNING).bold()
        } else {
            value
        };
        let (mins, secs) = (snap.countdown / 60, snap.countdown % 60);
        if mins < 10 {
            x = fb.put_str(x, y, "0", time_style);
        }
        x = fb.put_u32(x, y, mins, time_style);
        x = fb.put_str(x, y, ":", time_style);
        if secs < 10 {
            x = fb.put_str(x, y, "0", time_style);
        }
        x = fb.put_u32(x, y, secs, time_style);

        x = fb.put_str(x, y, "  FOUND ", label);
        x = fb.put_u32(x, y, snap.found as u32, value);
        x = fb.put_str(x, y, "/", value);
        x = fb.put_u32(x, y, snap.target_count as u32, value);

        x = fb.put_str(x, y, "  ERRORS ", label);
        fb.put_u32(x, y, snap.errors, value);
    }

    fn draw_sequence(&self, fb: &mut FrameBuffer, snap: &RoundSnapshot, viewport: Viewport, y: u16) {
        let label = CellStyle::fg(MUTED);
        let slots = snap.target_count as u16;
        let width = 14 + slots * 3;
        let mut x = viewport.width.saturating_sub(width) / 2;

        if snap.phase == Phase::SequenceDisplay {
            x = fb.put_str(x, y, "MEMORIZE (", label);
            x = fb.put_u32(x, y, snap.sequence_secs_left, CellStyle::fg(TEXT).bold());
            x = fb.put_str(x, y, "): ", label);
        } else {
            x = fb.put_str(x, y, "TARGETS:  ", label);
        }

        for slot in 0..snap.target_count {
            match snap.sequence.get(slot) {
                Some(&fruit) => {
                    fb.put_str(x, y, fruit.short(), CellStyle::fg(fruit_color(fruit)).bold());
                }
                None => {
                    fb.put_str(x, y, "__", CellStyle::fg(MUTED).dim());
                }
            }
            x = x.saturating_add(3);
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, x: u16, y: u16, view: CellView, style: CellStyle) {
        fb.fill_rect(x, y, self.cell_w, 1, ' ', style);
        let label = match view {
            CellView::Hidden => "··",
            CellView::Revealed(fruit) | CellView::Matched(fruit) => fruit.short(),
        };
        fb.put_str_centered(x, self.cell_w, y, label, style);
    }
}

fn cell_style(view: CellView, selected: bool, under_cursor: bool) -> CellStyle {
    let mut style = match view {
        CellView::Hidden => CellStyle::fg(MUTED).on(BOARD_BG).dim(),
        CellView::Revealed(fruit) => CellStyle::fg(fruit_color(fruit)).on(BOARD_BG).bold(),
        CellView::Matched(_) => CellStyle::fg(Rgb::new(235, 255, 235)).on(MATCHED_BG),
    };
    if selected {
        style = style.on(SELECTED_BG);
    }
    if under_cursor {
        style = style.reversed();
    }
    style
}

fn overlay_text<'a>(snap: &RoundSnapshot, hud: &'a Hud) -> Option<&'a str> {
    if let Some(banner) = hud.banner() {
        return Some(banner.text());
    }
    match snap.phase {
        Phase::Idle => Some("Press S to start"),
        Phase::GameComplete => Some("Game complete!"),
        _ => None,
    }
}

fn severity_style(severity: Severity) -> CellStyle {
    match severity {
        Severity::Info => CellStyle::fg(TEXT),
        Severity::Success => CellStyle::fg(Rgb::new(100, 220, 120)).bold(),
        Severity::Error => CellStyle::fg(WARNING).bold(),
    }
}

pub fn fruit_color(fruit: Fruit) -> Rgb {
    match fruit {
        Fruit::Apple => Rgb::new(220, 60, 60),
        Fruit::Banana => Rgb::new(240, 220, 80),
        Fruit::Grape => Rgb::new(160, 100, 210),
        Fruit::Orange => Rgb::new(255, 165, 0),
        Fruit::Lemon => Rgb::new(250, 250, 120),
        Fruit::Cherry => Rgb::new(200, 30, 70),
        Fruit::Strawberry => Rgb::new(235, 80, 100),
        Fruit::Peach => Rgb::new(255, 180, 140),
        Fruit::Pineapple => Rgb::new(225, 195, 60),
        Fruit::Coconut => Rgb::new(180, 140, 100),
        Fruit::Kiwi => Rgb::new(140, 200, 80),
        Fruit::Mango => Rgb::new(255, 190, 60),
    }
}
