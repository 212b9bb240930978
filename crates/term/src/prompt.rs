//! Name-entry box drawn over the finished game when a score makes the board.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::frame::{Viewport, BORDER, HINT, LABEL};
use crate::types::FinalScore;

const FIELD: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(45, 45, 55));
const PROMPT_W: u16 = 34;
const PROMPT_H: u16 = 7;

/// Draw the prompt centred in the viewport. `name` is the text typed so far.
pub fn draw_name_prompt(fb: &mut FrameBuffer, viewport: Viewport, score: FinalScore, name: &str) {
    let w = PROMPT_W.min(viewport.width);
    let h = PROMPT_H.min(viewport.height);
    let x = viewport.width.saturating_sub(w) / 2;
    let y = viewport.height.saturating_sub(h) / 2;

    fb.fill_rect(x, y, w, h, ' ', CellStyle::default());
    fb.draw_box(x, y, w, h, BORDER);

    let title = match score {
        FinalScore::Points(_) => "NEW HIGH SCORE",
        FinalScore::Elapsed { .. } => "NEW BEST TIME",
    };
    fb.put_str_centered(x, w, y + 1, title, LABEL);
    fb.put_str_centered(x, w, y + 2, &score.display(), LABEL);

    let field_w = w.saturating_sub(6);
    fb.fill_rect(x + 3, y + 4, field_w, 1, ' ', FIELD);
    let end = fb.put_str(x + 3, y + 4, name, FIELD);
    if end < x + 3 + field_w {
        fb.put_char(end, y + 4, '_', FIELD);
    }
    fb.put_str_centered(x, w, y + 5, "enter save  esc skip", HINT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_shows_score_and_typed_name() {
        let mut fb = FrameBuffer::new(80, 24);
        draw_name_prompt(&mut fb, Viewport::new(80, 24), FinalScore::Points(120), "ada");
        assert!(fb.contains_text("NEW HIGH SCORE"));
        assert!(fb.contains_text("120"));
        assert!(fb.contains_text("ada_"));
    }

    #[test]
    fn elapsed_scores_use_time_title() {
        let mut fb = FrameBuffer::new(80, 24);
        let score = FinalScore::Elapsed {
            minutes: 1,
            seconds: 5,
        };
        draw_name_prompt(&mut fb, Viewport::new(80, 24), score, "");
        assert!(fb.contains_text("NEW BEST TIME"));
        assert!(fb.contains_text("01:05"));
    }
}
