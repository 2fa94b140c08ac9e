//! Body-text layout: measurement, greedy line breaking with hyphenation,
//! and fully justified drawing.
//!
//! Widths are summed glyph advances without kerning, which is exact enough
//! for layout at card-text sizes and keeps measurement independent of the
//! rasterizer.

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use imageproc::rect::Rect;

/// Width of `text` at `scale` as the sum of glyph advances.
pub fn text_width(font: &FontArc, scale: PxScale, text: &str) -> f32 {
    let scaled = font.as_scaled(scale);
    text.chars()
        .map(|c| scaled.h_advance(scaled.glyph_id(c)))
        .sum()
}

/// Height of a text line (ascent plus descent) at `scale`.
pub fn line_height(font: &FontArc, scale: PxScale) -> f32 {
    let scaled = font.as_scaled(scale);
    scaled.ascent() - scaled.descent()
}

#[derive(Debug)]
struct Word {
    text: String,
    width: f32,
}

#[derive(Debug)]
struct Line {
    words: Vec<Word>,
    /// Sum of word widths, without any inter-word space.
    words_width: f32,
    /// Paragraph-final lines are never justified.
    ends_paragraph: bool,
}

/// Split an overlong word into a hyphenated head that fits `max_width` and
/// the remaining tail. The head always keeps at least one character so the
/// break makes progress.
fn hyphen_break(font: &FontArc, scale: PxScale, word: &str, max_width: f32) -> (String, String) {
    let chars: Vec<char> = word.chars().collect();
    let mut split = 1;
    for take in 2..chars.len() {
        let candidate: String = chars[..take].iter().chain(['-'].iter()).collect();
        if text_width(font, scale, &candidate) > max_width {
            break;
        }
        split = take;
    }
    let head: String = chars[..split].iter().chain(['-'].iter()).collect();
    let tail: String = chars[split..].iter().collect();
    (head, tail)
}

/// Greedy line breaking of `text` into lines no wider than `max_width`.
///
/// Explicit newlines end a paragraph; words wider than the whole line are
/// hyphen-broken rather than dropped or clipped.
fn break_lines(font: &FontArc, scale: PxScale, text: &str, max_width: f32) -> Vec<Line> {
    let space = text_width(font, scale, " ");
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut queue: std::collections::VecDeque<String> =
            paragraph.split_whitespace().map(String::from).collect();
        let mut words: Vec<Word> = Vec::new();
        let mut words_width = 0.0_f32;

        while let Some(word) = queue.pop_front() {
            let width = text_width(font, scale, &word);

            if width > max_width && words.is_empty() {
                if word.chars().count() <= 1 {
                    // Nothing left to split; emit it and let it overflow.
                    lines.push(Line {
                        words: vec![Word { text: word, width }],
                        words_width: width,
                        ends_paragraph: false,
                    });
                    continue;
                }
                let (head, tail) = hyphen_break(font, scale, &word, max_width);
                let head_width = text_width(font, scale, &head);
                lines.push(Line {
                    words: vec![Word {
                        text: head,
                        width: head_width,
                    }],
                    words_width: head_width,
                    ends_paragraph: false,
                });
                queue.push_front(tail);
                continue;
            }

            let fitted = words_width + space * words.len() as f32 + width;
            if words.is_empty() || fitted <= max_width {
                words_width += width;
                words.push(Word { text: word, width });
            } else {
                lines.push(Line {
                    words: std::mem::take(&mut words),
                    words_width,
                    ends_paragraph: false,
                });
                words_width = width;
                words.push(Word { text: word, width });
            }
        }

        lines.push(Line {
            words,
            words_width,
            ends_paragraph: true,
        });
    }

    lines
}

fn draw_line(
    canvas: &mut RgbaImage,
    font: &FontArc,
    scale: PxScale,
    color: Rgba<u8>,
    left: i32,
    y: i32,
    max_width: f32,
    base_space: f32,
    line: &Line,
) {
    let gaps = line.words.len().saturating_sub(1);
    // Full justification: spread the slack across the word gaps, except on
    // paragraph-final lines.
    let space = if !line.ends_paragraph && gaps > 0 {
        (max_width - line.words_width) / gaps as f32
    } else {
        base_space
    };

    let mut x = left as f32;
    for word in &line.words {
        draw_text_mut(canvas, color, x.round() as i32, y, scale, font, &word.text);
        x += word.width + space;
    }
}

/// Draw `text` into `bounds`, wrapped and fully justified, stepping the font
/// size down to `min_size` until the paragraph fits the box height.
pub fn draw_paragraph(
    canvas: &mut RgbaImage,
    font: &FontArc,
    start_size: f32,
    min_size: f32,
    color: Rgba<u8>,
    bounds: Rect,
    text: &str,
) {
    if text.trim().is_empty() {
        return;
    }

    let max_width = bounds.width() as f32;
    let mut size = start_size;
    let (lines, scale, height) = loop {
        let scale = PxScale::from(size);
        let lines = break_lines(font, scale, text, max_width);
        let height = line_height(font, scale);
        if lines.len() as f32 * height <= bounds.height() as f32 || size <= min_size {
            break (lines, scale, height);
        }
        size -= 1.0;
    };

    let base_space = text_width(font, scale, " ");
    let mut y = bounds.top() as f32;
    for line in &lines {
        draw_line(
            canvas,
            font,
            scale,
            color,
            bounds.left(),
            y.round() as i32,
            max_width,
            base_space,
            line,
        );
        y += height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fonts::{FontManager, FontStyle};

    fn test_font() -> FontArc {
        let fonts = FontManager::new().expect("font load failed");
        fonts.create("DejaVu Serif", FontStyle::Regular).clone()
    }

    #[test]
    fn test_wrapped_lines_fit_the_box() {
        let font = test_font();
        let scale = PxScale::from(27.0);
        let text = "Once per turn, you can discard one card from your hand \
                    to destroy one face-up monster on the field.";
        let lines = break_lines(&font, scale, text, 420.0);

        assert!(lines.len() > 1);
        for line in &lines {
            let gaps = line.words.len().saturating_sub(1);
            let space = text_width(&font, scale, " ");
            assert!(line.words_width + gaps as f32 * space <= 420.0 + 0.001);
        }
        assert!(lines.last().unwrap().ends_paragraph);
    }

    #[test]
    fn test_overlong_word_is_hyphenated_not_dropped() {
        let font = test_font();
        let scale = PxScale::from(27.0);
        let lines = break_lines(&font, scale, "Incomprehensibilities", 120.0);

        assert!(lines.len() > 1);
        for line in &lines[..lines.len() - 1] {
            assert!(line.words[0].text.ends_with('-'));
        }
        // Reassembling the pieces must give back the full word.
        let rebuilt: String = lines
            .iter()
            .flat_map(|l| l.words.iter())
            .map(|w| w.text.trim_end_matches('-'))
            .collect();
        assert_eq!(rebuilt, "Incomprehensibilities");
    }

    #[test]
    fn test_newline_ends_a_paragraph() {
        let font = test_font();
        let scale = PxScale::from(27.0);
        let lines = break_lines(&font, scale, "first\nsecond", 500.0);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_paragraph);
        assert!(lines[1].ends_paragraph);
    }

    #[test]
    fn test_justified_space_fills_the_line() {
        let font = test_font();
        let scale = PxScale::from(27.0);
        let max_width = 300.0;
        let lines = break_lines(&font, scale, "alpha beta gamma delta epsilon zeta", max_width);
        let full: Vec<_> = lines.iter().filter(|l| !l.ends_paragraph).collect();
        assert!(!full.is_empty());

        for line in full {
            let gaps = line.words.len().saturating_sub(1) as f32;
            if gaps > 0.0 {
                let space = (max_width - line.words_width) / gaps;
                let total = line.words_width + gaps * space;
                assert!((total - max_width).abs() < 0.01);
            }
        }
    }

    #[test]
    fn test_paragraph_shrinks_to_fit() {
        let font = test_font();
        let mut canvas = RgbaImage::from_pixel(400, 120, Rgba([255, 255, 255, 255]));
        let bounds = Rect::at(10, 10).of_size(380, 100);
        let text = "This effect can only be activated during your opponent's \
                    battle phase, and only while you control no monsters. \
                    Draw two cards, then discard one card.";
        draw_paragraph(
            &mut canvas,
            &font,
            27.0,
            12.0,
            Rgba([0, 0, 0, 255]),
            bounds,
            text,
        );

        // Nothing may spill below the box.
        for y in 115..120 {
            for x in 0..400 {
                assert_eq!(canvas.get_pixel(x, y), &Rgba([255, 255, 255, 255]));
            }
        }
    }
}
