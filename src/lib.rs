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
#![deny(missing_docs)]
//! `minimui` provides the field-handler layer of a monochrome minimal user
//! interface for tiny embedded displays. Each interactive element on a form
//! (button, value picker, bar, checkbox, radio, list row, string editor) is a
//! small state machine that multiplexes drawing, focus, selection, value
//! mutation and next/prev navigation over a single [`Field::handle`] entry
//! point. The crate binds a generic form interpreter (consumed through
//! [`FormNav`]) to a monochrome graphics layer (consumed through
//! [`MonoDisplay`]); it owns neither.
//!
//! # Input wiring
//!
//! The host decides how physical inputs map onto the message alphabet:
//!
//! * 2 buttons: select → [`Msg::CursorSelect`], second button →
//!   [`Msg::EventNext`]. Use [`EditModel::Select`] fields only.
//! * 3 buttons: select / next / prev. Either edit model works; with
//!   [`EditModel::UpDown`] the select button toggles capture and next/prev
//!   adjust the value.
//! * 4+ buttons: dedicated [`Msg::ValueIncrement`]/[`Msg::ValueDecrement`]
//!   buttons plus next/prev. Prefer [`EditModel::Select`].
//! * Rotary encoder (push and turn): rotation → next/prev, push →
//!   select. Prefer [`EditModel::UpDown`].
//!
//! For any user input the interpreter routes exactly one event message to the
//! focused field, applies focus transitions, then runs a single draw pass.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

mod chars;
mod draw;
mod fields;
mod scroll;
mod style;
#[cfg(test)]
pub(crate) mod testkit;

pub use chars::*;
pub use draw::*;
pub use fields::*;
pub use rs_math3d::Recti;
pub use scroll::*;
pub use style::*;

use bitflags::bitflags;

/// Convenience constructor for [`Recti`].
pub fn rect(x: i32, y: i32, w: i32, h: i32) -> Recti { Recti { x, y, width: w, height: h } }

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// Message alphabet dispatched by the form interpreter to field handlers.
/// Unused messages are no-ops for every handler.
pub enum Msg {
    /// Render the field at the current `(x, y)` origin.
    Draw,
    /// The owning form was entered; first chance to size the scroll window.
    FormStart,
    /// The owning form is about to be left.
    FormEnd,
    /// The cursor is about to move onto the field. A handler may refuse with
    /// [`Response::RefuseFocus`].
    CursorEnter,
    /// The select input was pressed while the field owns the cursor.
    CursorSelect,
    /// The cursor moved away from the field.
    CursorLeave,
    /// Dedicated increment input.
    ValueIncrement,
    /// Dedicated decrement input.
    ValueDecrement,
    /// Touch press over the field.
    TouchDown,
    /// Touch release over the field.
    TouchUp,
    /// Next-field navigation input.
    EventNext,
    /// Previous-field navigation input.
    EventPrev,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u8)]
/// Outcome of a [`Field::handle`] call, as seen by the interpreter.
pub enum Response {
    /// Nothing to report; the interpreter proceeds normally.
    Pass = 0,
    /// The handler consumed a next/prev event; focus must not move.
    Consumed = 1,
    /// Returned for [`Msg::CursorEnter`] when the field refuses the cursor
    /// (scroll-skip for rows beyond the data).
    RefuseFocus = 255,
}

impl Response {
    /// Returns the wire value of the response (0, 1 or 255).
    pub fn code(self) -> u8 { self as u8 }

    /// Returns `true` if the handler consumed the event.
    pub fn is_consumed(self) -> bool { self == Self::Consumed }

    /// Maps a navigation result onto [`Response::Consumed`]/[`Response::Pass`].
    pub fn consumed_if(flag: bool) -> Self {
        if flag { Self::Consumed } else { Self::Pass }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
/// Editing-capture state of the focused field.
///
/// The interpreter resets this to [`EditMode::Idle`] when the owning field
/// loses the cursor or when an editor completes.
pub enum EditMode {
    /// No capture; next/prev move the cursor between fields.
    #[default]
    Idle,
    /// Next/prev are captured and mutate the focused value.
    Capture,
    /// Character-level mutation inside the string editor.
    CharEdit,
}

impl EditMode {
    /// Returns `true` while the field holds next/prev capture.
    pub fn is_active(self) -> bool { self != Self::Idle }

    /// Flips between [`EditMode::Idle`] and [`EditMode::Capture`].
    pub fn toggle(&mut self) {
        *self = match *self {
            Self::Idle => Self::Capture,
            _ => Self::Idle,
        };
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// Behavioural axis of value-editing fields.
pub enum EditModel {
    /// Single-press model: select/increment/decrement mutate immediately.
    Select,
    /// Up/down capture model: select toggles capture, next/prev mutate while
    /// captured.
    UpDown,
}

bitflags! {
    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    /// Style bits passed to the graphics adapter's button primitives.
    /// The numeric values are implementation-defined but stable.
    pub struct DrawFlags : u16 {
        /// Center the label horizontally inside the button width.
        const HCENTER = 8;
        /// Draw a widened frame with a one pixel gap around the label.
        const XFRAME = 4;
        /// Invert label and background.
        const INVERT = 2;
        /// Draw a one pixel frame around the label.
        const FRAME = 1;
        /// Plain text.
        const NONE = 0;
    }

    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    /// Focus bits of the field currently being dispatched.
    pub struct FocusFlags : u8 {
        /// The field owns the touch focus.
        const TOUCH_FOCUS = 2;
        /// The field owns the cursor focus.
        const CURSOR_FOCUS = 1;
        /// No focus.
        const NONE = 0;
    }

    #[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
    /// Behavioural flags of a field descriptor.
    pub struct FieldFlags : u8 {
        /// The field accepts touch selection.
        const TOUCH_SELECTABLE = 2;
        /// The field can receive the cursor.
        const CURSOR_SELECTABLE = 1;
        /// Read-only field.
        const NONE = 0;
    }

    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    /// Options of the bar/slider control.
    pub struct BarFlags : u8 {
        /// Append the numeric readout after the bar.
        const SHOW_VALUE = 8;
        /// Multiply the bar length by four.
        const WIDE_4X = 4;
        /// Multiply the bar length by two.
        const WIDE_2X = 2;
        /// Clamp at the range ends instead of wrapping.
        const NO_WRAP = 1;
        /// Defaults: wrap, one pixel per value unit, no readout.
        const NONE = 0;
    }

    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    /// Character classes selectable inside the string editor.
    pub struct CharClasses : u8 {
        /// `:`-`@`, `[`-`` ` ``, `{`-`~`.
        const EXTENDED_SPECIAL = 16;
        /// `!`-`/`.
        const RESTRICTED_SPECIAL = 8;
        /// `A`-`Z`.
        const UPPER = 4;
        /// `a`-`z`.
        const LOWER = 2;
        /// `0`-`9`.
        const DIGITS = 1;
        /// Space and the delete sentinel only.
        const NONE = 0;
    }
}

impl FocusFlags {
    /// Returns `true` if the cursor-focus bit is set.
    pub fn is_cursor_focus(&self) -> bool { self.intersects(Self::CURSOR_FOCUS) }
    /// Returns `true` if the touch-focus bit is set.
    pub fn is_touch_focus(&self) -> bool { self.intersects(Self::TOUCH_FOCUS) }
}

impl FieldFlags {
    /// Returns `true` if the field can receive the cursor.
    pub fn is_cursor_selectable(&self) -> bool { self.intersects(Self::CURSOR_SELECTABLE) }
    /// Returns `true` if the field accepts touch selection.
    pub fn is_touch_selectable(&self) -> bool { self.intersects(Self::TOUCH_SELECTABLE) }
}

impl BarFlags {
    /// Returns `true` if the bar clamps instead of wrapping.
    pub fn is_no_wrap(&self) -> bool { self.intersects(Self::NO_WRAP) }
    /// Returns the pixel shift derived from the width flags (0, 1 or 2).
    pub fn scale(&self) -> u32 {
        let mut scale = 0;
        if self.intersects(Self::WIDE_2X) {
            scale |= 1;
        }
        if self.intersects(Self::WIDE_4X) {
            scale |= 2;
        }
        scale
    }
    /// Returns `true` if the numeric readout follows the bar.
    pub fn shows_value(&self) -> bool { self.intersects(Self::SHOW_VALUE) }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
/// Opaque, non-owning handle into the form definition. Only the interpreter
/// knows how to resolve it; handlers merely carry it around (notably
/// `last_form_fds`, the read-through used by child rows to reach the parent's
/// option list).
pub struct FdsRef(usize);

impl FdsRef {
    /// Creates a handle from an interpreter-defined value.
    pub fn new(value: usize) -> Self { Self(value) }

    /// Returns the raw value wrapped by this handle.
    pub fn raw(self) -> usize { self.0 }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
/// Opaque handle to a font known to the graphics adapter.
pub struct FontRef(usize);

impl FontRef {
    /// Creates a handle from an adapter-defined value.
    pub fn new(value: usize) -> Self { Self(value) }

    /// Returns the raw value wrapped by this handle.
    pub fn raw(self) -> usize { self.0 }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
/// Scroll window of the current form: which slice of a long list is rendered.
pub struct ScrollWindow {
    /// Index of the first visible row.
    pub top: u8,
    /// Number of visible rows; set by the first child on form start.
    pub visible: u8,
    /// Total number of rows; set once per form entry.
    pub total: u8,
}

#[derive(Clone)]
/// User-supplied binding of an integer picker.
pub struct U8MinMax {
    /// Current value, owned by the application.
    pub value: Cell<u8>,
    /// Inclusive lower bound.
    pub min: u8,
    /// Inclusive upper bound.
    pub max: u8,
}

impl U8MinMax {
    /// Creates a picker binding with the given initial value and range.
    pub fn new(value: u8, min: u8, max: u8) -> Self { Self { value: Cell::new(value), min, max } }
}

#[derive(Clone)]
/// User-supplied binding of a bar/slider control.
pub struct U8MinMaxStep {
    /// Current value, owned by the application.
    pub value: Cell<u8>,
    /// Inclusive lower bound.
    pub min: u8,
    /// Inclusive upper bound.
    pub max: u8,
    /// Amount added/removed per event.
    pub step: u8,
    /// Total bar length in value units for fixed-width bars.
    pub width: u8,
    /// Wrap/scale/readout options.
    pub flags: BarFlags,
}

#[derive(Clone)]
/// User-supplied binding of the in-place string editor.
pub struct StringData {
    /// The edited byte buffer.
    pub value: RefCell<EditBuffer>,
    /// Character classes offered while editing.
    pub flags: CharClasses,
}

impl StringData {
    /// Creates a string binding with the given initial content, capacity and
    /// character classes.
    pub fn new(initial: &str, max_length: u8, flags: CharClasses) -> Self {
        Self {
            value: RefCell::new(EditBuffer::new(initial, max_length as usize)),
            flags,
        }
    }
}

/// User-supplied abstract list consumed by the U16 list fields.
///
/// `element` may be called with any index; out-of-range lookups must return
/// an empty string (the handlers degrade instead of erroring).
pub trait ListSource {
    /// Number of entries.
    fn count(&self) -> u16;
    /// Text of the entry at `index`.
    fn element(&self, index: u16) -> String;
}

impl<T: AsRef<str>> ListSource for Vec<T> {
    fn count(&self) -> u16 { self.len().min(u16::MAX as usize) as u16 }
    fn element(&self, index: u16) -> String { self.get(index as usize).map(|s| s.as_ref().to_string()).unwrap_or_default() }
}

/// User-supplied binding of the U16 list fields: a 16-bit selection plus the
/// list the selection indexes into.
pub struct ListData {
    /// Currently selected entry.
    pub selection: Cell<u16>,
    /// The list entries.
    pub source: Rc<dyn ListSource>,
}

impl ListData {
    /// Creates a list binding with the given initial selection.
    pub fn new(selection: u16, source: Rc<dyn ListSource>) -> Self { Self { selection: Cell::new(selection), source } }
}

#[derive(Clone, Default)]
/// Data bound to a field descriptor, one variant per field family.
/// Handlers ignore descriptors carrying an unexpected variant.
pub enum FieldData {
    /// No binding (labels, plain goto buttons).
    #[default]
    None,
    /// A single byte: checkbox/radio state, option index, character value or
    /// the exit button's result slot.
    U8(Rc<Cell<u8>>),
    /// Integer picker binding.
    U8MinMax(Rc<U8MinMax>),
    /// Bar/slider binding.
    U8MinMaxStep(Rc<U8MinMaxStep>),
    /// String editor binding.
    Str(Rc<StringData>),
    /// U16 list binding.
    List(Rc<ListData>),
    /// Font applied by the font-style field.
    Font(FontRef),
}

impl FieldData {
    /// Returns the plain byte binding, if that is what the field carries.
    pub fn u8_value(&self) -> Option<Rc<Cell<u8>>> {
        match self {
            Self::U8(v) => Some(v.clone()),
            _ => None,
        }
    }

    /// Returns the integer-picker binding, if present.
    pub fn u8_min_max(&self) -> Option<Rc<U8MinMax>> {
        match self {
            Self::U8MinMax(v) => Some(v.clone()),
            _ => None,
        }
    }

    /// Returns the bar binding, if present.
    pub fn u8_min_max_step(&self) -> Option<Rc<U8MinMaxStep>> {
        match self {
            Self::U8MinMaxStep(v) => Some(v.clone()),
            _ => None,
        }
    }

    /// Returns the string-editor binding, if present.
    pub fn string(&self) -> Option<Rc<StringData>> {
        match self {
            Self::Str(v) => Some(v.clone()),
            _ => None,
        }
    }

    /// Returns the list binding, if present.
    pub fn list(&self) -> Option<Rc<ListData>> {
        match self {
            Self::List(v) => Some(v.clone()),
            _ => None,
        }
    }

    /// Returns the bound font, if present.
    pub fn font(&self) -> Option<FontRef> {
        match self {
            Self::Font(f) => Some(*f),
            _ => None,
        }
    }
}

#[derive(Clone, Default)]
/// Field descriptor: behavioural flags plus the data binding (the MUIF).
pub struct FieldDesc {
    /// Selectability flags.
    pub cflags: FieldFlags,
    /// Data bound to the field.
    pub data: FieldData,
}

impl FieldDesc {
    /// Creates a cursor-selectable descriptor around `data`.
    pub fn selectable(data: FieldData) -> Self { Self { cflags: FieldFlags::CURSOR_SELECTABLE, data } }

    /// Creates a read-only descriptor around `data`.
    pub fn read_only(data: FieldData) -> Self { Self { cflags: FieldFlags::NONE, data } }
}

/// Shared UI state owned by the form interpreter and lent to every handler.
///
/// Handlers keep no state of their own between messages; everything lives
/// here or in the user-bound values.
pub struct UiState {
    /// Draw origin of the current field, in display units. Doubled by the
    /// adapter on displays at least 255 pixels wide.
    pub x: u8,
    /// Text baseline of the current field, in pixels.
    pub y: u8,
    /// 8-bit parameter parsed from the field definition; per-field semantics
    /// (form id, width, row index, ...).
    pub arg: u8,
    /// Label or `|`-separated option list of the current field. Interpreter
    /// lookups overwrite it in place.
    pub text: String,
    /// Definition position of the current field.
    pub fds: FdsRef,
    /// Definition position of the form's option-list anchor, read by child
    /// rows to recover the parent's options.
    pub last_form_fds: FdsRef,
    /// Scratch slot used by the string editor for the caret position.
    pub token: u16,
    /// Focus bits of the current field.
    pub dflags: FocusFlags,
    /// Descriptor of the current field.
    pub uif: FieldDesc,
    /// Editing-capture state of the focused field.
    pub edit_mode: EditMode,
    /// Scroll window of the current form.
    pub scroll: ScrollWindow,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            arg: 0,
            text: String::new(),
            fds: FdsRef::default(),
            last_form_fds: FdsRef::default(),
            token: 0,
            dflags: FocusFlags::NONE,
            uif: FieldDesc::default(),
            edit_mode: EditMode::Idle,
            scroll: ScrollWindow::default(),
        }
    }
}

impl UiState {
    /// Returns `true` if the current field owns the cursor focus.
    pub fn is_cursor_focus(&self) -> bool { self.dflags.is_cursor_focus() }

    /// Returns `true` if the current field owns the touch focus.
    pub fn is_touch_focus(&self) -> bool { self.dflags.is_touch_focus() }

    /// Clears the per-form state. The interpreter applies this when entering
    /// a form, before the fields receive [`Msg::FormStart`].
    pub fn reset_form_state(&mut self) {
        self.token = 0;
        self.edit_mode = EditMode::Idle;
        self.scroll = ScrollWindow::default();
    }
}

/// Monochrome graphics primitives consumed by the handlers.
///
/// The adapter is assumed infallible on a frame buffer; zero-sized frame and
/// box draws must be no-ops. `y` denotes the text baseline throughout.
pub trait MonoDisplay {
    /// Display width in pixels.
    fn display_width(&self) -> i32;
    /// Display height in pixels.
    fn display_height(&self) -> i32;
    /// Ascent of the current font.
    fn ascent(&self) -> i32;
    /// Widest character advance of the current font.
    fn max_char_width(&self) -> i32;
    /// Pixel width of the given UTF-8 text in the current font.
    fn utf8_width(&self, text: &str) -> i32;
    /// Selects the font used by subsequent calls.
    fn set_font(&mut self, font: FontRef);
    /// Draws UTF-8 text with its baseline at `(x, y)`.
    fn draw_utf8(&mut self, x: i32, y: i32, text: &str);
    /// Draws a one pixel outline.
    fn draw_frame(&mut self, r: Recti);
    /// Draws a filled rectangle.
    fn draw_box(&mut self, r: Recti);
    /// Draws a label inside a button of the given width and paddings,
    /// styled by `flags`.
    fn draw_button_utf8(&mut self, x: i32, y: i32, flags: DrawFlags, width: i32, pad_h: i32, pad_v: i32, text: &str);
    /// Draws only the button frame/inversion around an already rendered
    /// composite.
    fn draw_button_frame(&mut self, x: i32, y: i32, flags: DrawFlags, width: i32, pad_h: i32, pad_v: i32);
    /// Replaces the font descent used for button-frame measurement and
    /// returns the previous value. Callers restore by passing the saved
    /// value back.
    fn replace_descent(&mut self, descent: i32) -> i32;
}

/// Form-interpreter services consumed by the handlers.
///
/// Token and option lookups write into the caller-provided string (the
/// shared `text` slot), mirroring the interpreter's in-place parse buffer.
pub trait FormNav {
    /// Fetches the nth `|`-separated token of the current field's option
    /// list into `text`. Returns `false` when `n` is out of range.
    fn fds_get_nth_token(&mut self, text: &mut String, n: u8) -> bool;
    /// Number of `|`-separated tokens of the current field.
    fn fds_get_token_count(&mut self) -> u8;
    /// Fetches the text of the `index`th selectable option of the form at
    /// `fds` into `text`. Returns `false` when the option does not exist.
    fn selectable_option_text(&mut self, fds: FdsRef, text: &mut String, index: u8) -> bool;
    /// Number of selectable options of the form at `fds`.
    fn selectable_option_count(&mut self, fds: FdsRef) -> u8;
    /// Switches to form `id` with the cursor on `cursor`. Returns `false`
    /// when the form does not exist.
    fn goto_form(&mut self, id: u8, cursor: u8) -> bool;
    /// Switches to form `id`, restoring a previously saved cursor position
    /// if one exists. Returns `false` when the form does not exist.
    fn goto_form_auto_cursor(&mut self, id: u8) -> bool;
    /// Pushes the current form and cursor position onto the form stack.
    fn save_form(&mut self);
    /// Pops and re-enters the most recently saved form.
    fn restore_form(&mut self);
    /// Records `pos` as the cursor position to restore on the next
    /// auto-cursor transition to the current form.
    fn save_cursor_position(&mut self, pos: u8);
    /// Leaves the menu system entirely.
    fn leave_form(&mut self);
}

/// Trait implemented by field handlers.
///
/// Handlers are stateless configuration values; a single handler instance
/// may serve any number of fields. All mutable state lives in [`UiState`] or
/// in the bound [`FieldData`].
pub trait Field {
    /// Processes one message for the field currently described by `ctx.ui`.
    fn handle(&self, ctx: &mut FieldCtx<'_>, msg: Msg) -> Response;
}
