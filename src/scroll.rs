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
use crate::{Msg, Response, UiState};

/// Shared scroll handling for rows of a long list (`arg` is the row index
/// inside the visible window).
///
/// * `CURSOR_ENTER` refuses focus for rows beyond the data, so the cursor
///   skips empty trailing slots.
/// * `EVENT_NEXT` on the last visible row scrolls one row down and consumes
///   the event while more rows exist; at the end it rewinds `top` to 0 and
///   passes, letting the caller roll focus to the first field.
/// * `EVENT_PREV` on the first visible row scrolls one row up and consumes
///   the event; at the top it exposes the list tail and passes, letting the
///   caller wrap focus to the last field.
///
/// Scrolling and focus wrap cooperate: repeated PREV from the top of a long
/// list lands on its tail.
pub fn handle_scroll_next_prev(ui: &mut UiState, msg: Msg) -> Response {
    let arg = ui.arg as u16;
    match msg {
        Msg::CursorEnter => {
            if arg > 0 && ui.scroll.top as u16 + arg >= ui.scroll.total as u16 {
                return Response::RefuseFocus;
            }
        }
        Msg::EventNext => {
            if arg + 1 == ui.scroll.visible as u16 {
                if ui.scroll.visible as u16 + (ui.scroll.top as u16) < ui.scroll.total as u16 {
                    ui.scroll.top += 1;
                    return Response::Consumed;
                }
                ui.scroll.top = 0;
            }
        }
        Msg::EventPrev => {
            if arg == 0 {
                if ui.scroll.top > 0 {
                    ui.scroll.top -= 1;
                    return Response::Consumed;
                }
                ui.scroll.top = ui.scroll.total.saturating_sub(ui.scroll.visible);
            }
        }
        _ => {}
    }
    Response::Pass
}
