//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::chars::glyph_str;
use crate::draw::BUTTON_V_PADDING;
use crate::*;
use log::debug;

/// Visible window width in characters: `arg`, or as many max-width
/// characters as fit between the origin and the display edge.
fn window_chars(ctx: &FieldCtx<'_>) -> u8 {
    if ctx.ui.arg != 0 {
        ctx.ui.arg
    } else {
        let fit = (ctx.gfx.display_width() - ctx.scaled_x()) / ctx.gfx.max_char_width().max(1);
        fit.clamp(0, 255) as u8
    }
}

fn cycle_char(buf: &mut EditBuffer, pos: usize, classes: CharClasses, up: bool) {
    let mut b = buf.byte(pos);
    loop {
        b = if up { b.wrapping_add(1) } else { b.wrapping_sub(1) };
        if is_edit_char(b, classes) {
            break;
        }
    }
    buf.set_byte(pos, b);
}

fn select_event(ctx: &mut FieldCtx<'_>, sd: &StringData) {
    let pos = ctx.ui.token as usize;
    match ctx.ui.edit_mode {
        EditMode::Capture => {
            let mut buf = sd.value.borrow_mut();
            if pos == buf.len() {
                // Caret on the enter glyph: trim the insert slot and leave.
                ctx.ui.edit_mode = EditMode::Idle;
                ctx.ui.scroll = ScrollWindow::default();
                ctx.ui.token = 0;
                buf.pop();
                debug!("string edit finished, content length {}", buf.len());
            } else {
                ctx.ui.edit_mode = EditMode::CharEdit;
            }
        }
        EditMode::CharEdit => {
            let mut buf = sd.value.borrow_mut();
            if buf.byte(pos) == CHAR_DELETE {
                buf.remove(pos);
            }
            // Confirming the last slot opens a fresh insert slot, trimmed
            // again on exit.
            if pos + 1 == ctx.ui.scroll.total as usize && buf.len() < buf.cap() {
                buf.push_space();
            }
            ctx.ui.scroll.total = buf.len().min(255) as u8;
            ctx.ui.edit_mode = EditMode::Capture;
        }
        EditMode::Idle => {
            let visible = window_chars(ctx).saturating_add(1);
            let mut buf = sd.value.borrow_mut();
            ctx.ui.edit_mode = EditMode::Capture;
            buf.push_space();
            ctx.ui.scroll.total = buf.len().min(255) as u8;
            ctx.ui.scroll.visible = visible;
            debug!("string edit started, content length {}", buf.len());
        }
    }
}

fn next_event(ctx: &mut FieldCtx<'_>, sd: &StringData) -> Response {
    match ctx.ui.edit_mode {
        EditMode::Capture => {
            let total = ctx.ui.scroll.total as i32;
            let visible = ctx.ui.scroll.visible as i32;
            let mut pos = ctx.ui.token as i32;
            if pos < total {
                pos += 1;
                ctx.ui.token = pos as u16;
            }
            if pos + 1 >= visible && visible + (ctx.ui.scroll.top as i32) < total {
                ctx.ui.scroll.top += 1;
            }
            Response::Consumed
        }
        EditMode::CharEdit => {
            let mut buf = sd.value.borrow_mut();
            cycle_char(&mut buf, ctx.ui.token as usize, sd.flags, true);
            Response::Consumed
        }
        EditMode::Idle => Response::Pass,
    }
}

fn prev_event(ctx: &mut FieldCtx<'_>, sd: &StringData) -> Response {
    match ctx.ui.edit_mode {
        EditMode::Capture => {
            // The caret moves first; the window check runs on the already
            // decremented position. This ordering shapes the visible edge
            // behaviour and is load-bearing.
            let mut pos = ctx.ui.token as i32;
            if pos != 0 {
                pos -= 1;
                ctx.ui.token = pos as u16;
            }
            if pos - 1 <= ctx.ui.scroll.top as i32 && ctx.ui.scroll.top > 0 {
                ctx.ui.scroll.top -= 1;
            }
            Response::Consumed
        }
        EditMode::CharEdit => {
            let mut buf = sd.value.borrow_mut();
            cycle_char(&mut buf, ctx.ui.token as usize, sd.flags, false);
            Response::Consumed
        }
        EditMode::Idle => Response::Pass,
    }
}

fn draw_string(ctx: &mut FieldCtx<'_>, sd: &StringData) {
    let editing = ctx.ui.edit_mode.is_active() && ctx.ui.is_cursor_focus();
    if editing {
        let frame_flags = if ctx.ui.edit_mode == EditMode::Capture {
            DrawFlags::FRAME | DrawFlags::INVERT
        } else {
            DrawFlags::FRAME
        };
        let x = ctx.scaled_x();
        let y = ctx.y();
        let pos = ctx.ui.token as i32;
        let top = ctx.ui.scroll.top as i32;
        let visible = ctx.ui.scroll.visible as i32;
        let total = ctx.ui.scroll.total as i32;
        let mut buf = sd.value.borrow_mut();
        let mut xoff = 0;
        let mut i = top;
        // Characters are drawn one by one so the caret slot can carry its
        // own spacing and frame; past the last character sits the enter
        // glyph.
        while i <= visible && i <= total {
            let glyph = if i == total {
                glyph_str(CHAR_ENTER)
            } else {
                let mut b = buf.byte(i as usize);
                while !is_edit_char(b, sd.flags) {
                    b = b.wrapping_add(1);
                }
                buf.set_byte(i as usize, b);
                glyph_str(b)
            };
            let caret = i == pos;
            ctx.gfx.draw_utf8(x + xoff + if caret { 2 } else { 0 }, y, &glyph);
            let glyph_width = ctx.gfx.utf8_width(&glyph);
            if caret {
                ctx.gfx.draw_button_frame(x + xoff + 1, y, frame_flags, glyph_width + 2, 0, BUTTON_V_PADDING);
            }
            xoff += glyph_width + if caret { 5 } else { 1 };
            i += 1;
        }
    } else {
        let window = window_chars(ctx) as usize;
        let full = sd.value.borrow().display();
        let shown: String = full.chars().take(window).collect();
        let width = ctx.gfx.utf8_width(&full) + 1;
        ctx.draw_styled_button(FocusStyle::PlainInvert, width, 1, &shown);
    }
}

/// In-place string editor over a [`StringData`] binding.
///
/// Three states: idle (a single-line button), caret selection (characters
/// drawn individually, the caret framed, an enter glyph past the end) and
/// character edit (next/prev cycle the byte under the caret through the
/// configured classes; confirming the delete sentinel removes it). Entering
/// edit mode appends a temporary trailing space as the insert-at-end slot;
/// leaving trims it.
pub struct StringInput;

impl Field for StringInput {
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response {
        let Some(sd) = ctx.ui.uif.data.string() else {
            return Response::Pass;
        };
        match msg {
            Msg::Draw => {
                draw_string(ctx, &sd);
                Response::Pass
            }
            Msg::CursorSelect | Msg::ValueIncrement | Msg::ValueDecrement => {
                // Several of these fields can share a form; only the focused
                // one reacts.
                if ctx.ui.is_cursor_focus() {
                    select_event(ctx, &sd);
                }
                Response::Pass
            }
            Msg::EventNext => {
                if ctx.ui.is_cursor_focus() {
                    return next_event(ctx, &sd);
                }
                Response::Pass
            }
            Msg::EventPrev => prev_event(ctx, &sd),
            _ => Response::Pass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{DrawOp, Fixture};
    use std::rc::Rc;

    fn editor(initial: &str, cap: u8, classes: CharClasses) -> (Fixture, Rc<StringData>) {
        let sd = Rc::new(StringData::new(initial, cap, classes));
        let fixture = Fixture::with_data(FieldData::Str(sd.clone())).focus();
        (fixture, sd)
    }

    #[test]
    fn select_enters_edit_mode_with_insert_slot() {
        let (mut fixture, sd) = editor("ab", 10, CharClasses::LOWER);
        fixture.send(&StringInput, Msg::CursorSelect);
        assert_eq!(fixture.ui.edit_mode, EditMode::Capture);
        assert_eq!(sd.value.borrow().bytes(), b"ab ");
        assert_eq!(fixture.ui.scroll.total, 3);
        // Default window: 128 / 6 characters, plus the enter slot.
        assert_eq!(fixture.ui.scroll.visible, 22);
    }

    #[test]
    fn delete_character_then_exit() {
        let (mut fixture, sd) = editor("ab", 10, CharClasses::LOWER);
        fixture.send(&StringInput, Msg::CursorSelect);
        assert_eq!(fixture.send(&StringInput, Msg::EventNext), Response::Consumed);
        assert_eq!(fixture.ui.token, 1);
        fixture.send(&StringInput, Msg::CursorSelect);
        assert_eq!(fixture.ui.edit_mode, EditMode::CharEdit);

        // Cycle the byte under the caret until the delete sentinel shows.
        let mut guard = 0;
        while sd.value.borrow().byte(1) != CHAR_DELETE {
            assert_eq!(fixture.send(&StringInput, Msg::EventNext), Response::Consumed);
            guard += 1;
            assert!(guard < 256, "delete sentinel never reached");
        }
        fixture.send(&StringInput, Msg::CursorSelect);
        assert_eq!(fixture.ui.edit_mode, EditMode::Capture);
        assert_eq!(sd.value.borrow().bytes(), b"a ");
        assert_eq!(fixture.ui.scroll.total, 2);

        // Walk to the enter glyph and confirm.
        fixture.send(&StringInput, Msg::EventNext);
        assert_eq!(fixture.ui.token, 2);
        fixture.send(&StringInput, Msg::CursorSelect);
        assert_eq!(fixture.ui.edit_mode, EditMode::Idle);
        assert_eq!(sd.value.borrow().bytes(), b"a");
        assert_eq!(fixture.ui.scroll, ScrollWindow::default());
        assert_eq!(fixture.ui.token, 0);
    }

    #[test]
    fn typing_at_the_end_grows_the_string() {
        let (mut fixture, sd) = editor("a", 10, CharClasses::LOWER);
        fixture.send(&StringInput, Msg::CursorSelect);
        fixture.send(&StringInput, Msg::EventNext);
        fixture.send(&StringInput, Msg::CursorSelect);
        // The insert slot cycles from space straight to 'a'.
        fixture.send(&StringInput, Msg::EventNext);
        assert_eq!(sd.value.borrow().byte(1), b'a');
        fixture.send(&StringInput, Msg::CursorSelect);
        // Confirming the last slot opened a fresh one.
        assert_eq!(sd.value.borrow().bytes(), b"aa ");
        assert_eq!(fixture.ui.scroll.total, 3);

        fixture.send(&StringInput, Msg::EventNext);
        fixture.send(&StringInput, Msg::EventNext);
        fixture.send(&StringInput, Msg::CursorSelect);
        assert_eq!(sd.value.borrow().bytes(), b"aa");
    }

    #[test]
    fn capacity_bounds_the_session() {
        let (mut fixture, sd) = editor("ab", 3, CharClasses::LOWER);
        fixture.send(&StringInput, Msg::CursorSelect);
        assert_eq!(sd.value.borrow().len(), 3);
        fixture.send(&StringInput, Msg::EventNext);
        fixture.send(&StringInput, Msg::EventNext);
        fixture.send(&StringInput, Msg::CursorSelect);
        fixture.send(&StringInput, Msg::EventNext);
        fixture.send(&StringInput, Msg::CursorSelect);
        // No room for another insert slot at capacity.
        assert_eq!(sd.value.borrow().len(), 3);
        fixture.send(&StringInput, Msg::EventNext);
        fixture.send(&StringInput, Msg::CursorSelect);
        assert!(sd.value.borrow().len() <= 2);
    }

    #[test]
    fn caret_next_scrolls_at_window_edge() {
        let (mut fixture, _sd) = editor("abcdefghij", 12, CharClasses::LOWER);
        fixture.ui.arg = 2;
        fixture.send(&StringInput, Msg::CursorSelect);
        assert_eq!(fixture.ui.scroll.visible, 3);
        fixture.send(&StringInput, Msg::EventNext);
        assert_eq!((fixture.ui.token, fixture.ui.scroll.top), (1, 0));
        fixture.send(&StringInput, Msg::EventNext);
        assert_eq!((fixture.ui.token, fixture.ui.scroll.top), (2, 1));
        fixture.send(&StringInput, Msg::EventNext);
        assert_eq!((fixture.ui.token, fixture.ui.scroll.top), (3, 2));
    }

    #[test]
    fn caret_prev_moves_then_checks_the_edge() {
        let (mut fixture, _sd) = editor("abcdefghij", 12, CharClasses::LOWER);
        fixture.ui.arg = 2;
        fixture.send(&StringInput, Msg::CursorSelect);
        fixture.ui.token = 2;
        fixture.ui.scroll.top = 1;
        assert_eq!(fixture.send(&StringInput, Msg::EventPrev), Response::Consumed);
        // Caret decrements first, then the boundary check pulls the window.
        assert_eq!((fixture.ui.token, fixture.ui.scroll.top), (1, 0));
        fixture.send(&StringInput, Msg::EventPrev);
        assert_eq!((fixture.ui.token, fixture.ui.scroll.top), (0, 0));
        fixture.send(&StringInput, Msg::EventPrev);
        assert_eq!((fixture.ui.token, fixture.ui.scroll.top), (0, 0));
    }

    #[test]
    fn char_cycle_respects_classes() {
        let (mut fixture, sd) = editor("9", 4, CharClasses::DIGITS);
        fixture.send(&StringInput, Msg::CursorSelect);
        fixture.send(&StringInput, Msg::CursorSelect);
        assert_eq!(fixture.ui.edit_mode, EditMode::CharEdit);
        fixture.send(&StringInput, Msg::EventNext);
        assert_eq!(sd.value.borrow().byte(0), CHAR_DELETE);
        fixture.send(&StringInput, Msg::EventNext);
        assert_eq!(sd.value.borrow().byte(0), b' ');
        fixture.send(&StringInput, Msg::EventNext);
        assert_eq!(sd.value.borrow().byte(0), b'0');
        fixture.send(&StringInput, Msg::EventPrev);
        assert_eq!(sd.value.borrow().byte(0), b' ');
    }

    #[test]
    fn idle_draw_truncates_to_window() {
        let (mut fixture, _sd) = editor("abcdef", 10, CharClasses::LOWER);
        fixture.ui.arg = 2;
        fixture.send(&StringInput, Msg::Draw);
        match fixture.gfx.ops.last() {
            Some(DrawOp::Button { text, width, .. }) => {
                assert_eq!(text, "ab");
                // Width still measures the whole value.
                assert_eq!(*width, 6 * 6 + 1);
            }
            other => panic!("expected a button, got {other:?}"),
        }
    }

    #[test]
    fn editing_draw_frames_caret_and_shows_enter() {
        let (mut fixture, _sd) = editor("ab", 10, CharClasses::LOWER);
        fixture.ui.arg = 4;
        fixture.send(&StringInput, Msg::CursorSelect);
        fixture.send(&StringInput, Msg::Draw);
        // Caret slot: shifted glyph plus inverted frame.
        assert!(fixture.gfx.ops.contains(&DrawOp::Utf8 {
            x: 2,
            y: 0,
            text: "a".to_string(),
        }));
        assert!(fixture.gfx.ops.contains(&DrawOp::ButtonFrame {
            x: 1,
            y: 0,
            flags: DrawFlags::FRAME | DrawFlags::INVERT,
            width: 8,
            pad_h: 0,
            pad_v: 1,
        }));
        // The enter glyph sits past the insert slot.
        let enter = glyph_str(CHAR_ENTER);
        assert!(
            fixture
                .gfx
                .ops
                .iter()
                .any(|op| matches!(op, DrawOp::Utf8 { text, .. } if *text == enter))
        );
    }

    #[test]
    fn unfocused_field_ignores_select_and_draws_idle() {
        let (mut fixture, sd) = editor("ab", 10, CharClasses::LOWER);
        fixture.ui.dflags = FocusFlags::NONE;
        fixture.send(&StringInput, Msg::CursorSelect);
        assert_eq!(fixture.ui.edit_mode, EditMode::Idle);
        assert_eq!(sd.value.borrow().bytes(), b"ab");
        fixture.send(&StringInput, Msg::Draw);
        assert!(matches!(fixture.gfx.ops.last(), Some(DrawOp::Button { .. })));
    }
}
