//! Drives a button and a text input without a window.
//!
//! A scripted session types into the field, selects a word, copies it and
//! pastes it back, then clicks the button. The final frame's draw list is
//! printed. Run with `RUST_LOG=trace` to see every edit action.

use lumen_gui::{
    DrawList, InputSnapshot, InputState, Key, MemoryClipboard, MonospaceMeasurer, MouseButton,
    NamedKey, Point, Rect, Shape, UiContext,
};
use lumen_gui_interactive::{Button, TextInput};

const FRAME_TIME: f32 = 1.0 / 60.0;

enum Step {
    Press(Key),
    Release(Key),
    Type(&'static str),
    Click(Point),
}

struct App {
    input: InputState,
    draw_list: DrawList,
    measurer: MonospaceMeasurer,
    clipboard: MemoryClipboard,
    submit: Button,
    name: TextInput,
    submissions: usize,
}

impl App {
    fn new() -> Self {
        let mut input = InputState::new();
        input.begin_frame(FRAME_TIME);

        Self {
            input,
            draw_list: DrawList::new(),
            measurer: MonospaceMeasurer::default(),
            clipboard: MemoryClipboard::new(),
            submit: Button::new(Rect::from_xywh(20.0, 20.0, 120.0, 40.0), "Submit"),
            name: TextInput::new(Rect::from_xywh(20.0, 80.0, 240.0, 36.0), "Your name"),
            submissions: 0,
        }
    }

    fn frame(&mut self) {
        self.draw_list.clear();
        let mut snapshot = InputSnapshot::begin_frame(&self.input);
        {
            let mut ui = UiContext::new(
                &mut self.input,
                &mut self.draw_list,
                &mut self.measurer,
                &mut self.clipboard,
            );
            if self.submit.update_and_render(&mut snapshot, &mut ui) {
                self.submissions += 1;
            }
            self.name.update_and_render(&mut snapshot, &mut ui);
        }
        self.input.begin_frame(FRAME_TIME);
    }

    fn run(&mut self, step: Step) {
        match step {
            Step::Press(key) => {
                self.input.press_key(key, false);
                self.frame();
            }
            Step::Release(key) => {
                self.input.release_key(key);
                self.frame();
            }
            Step::Type(text) => {
                for ch in text.chars() {
                    let key = Key::Character(ch);
                    self.input.press_key(key, false);
                    self.frame();
                    self.input.release_key(key);
                }
            }
            Step::Click(position) => {
                self.input.set_cursor_position(Some(position));
                self.input.press_button(MouseButton::Left);
                self.frame();
                self.input.release_button(MouseButton::Left);
                self.frame();
            }
        }
    }

    fn print_frame(&self) {
        for clipped in self.draw_list.shapes() {
            match &clipped.shape {
                Shape::Rect(rect) => println!(
                    "  rect  {:?} fill={} stroke={}",
                    rect.rect,
                    rect.fill.is_some(),
                    rect.stroke.is_some()
                ),
                Shape::Text(text) => println!(
                    "  text  {:?} at ({}, {})",
                    text.text, text.position.x, text.position.y
                ),
            }
        }
    }
}

fn main() {
    env_logger::init();

    let shift = Key::Named(NamedKey::ShiftLeft);
    let ctrl = Key::Named(NamedKey::ControlLeft);
    let left = Key::Named(NamedKey::ArrowLeft);

    let mut app = App::new();
    let script = [
        Step::Click(Point::new(100.0, 98.0)),
        Step::Type("ada lovelace"),
        Step::Press(ctrl),
        Step::Press(shift),
        Step::Press(left),
        Step::Release(left),
        Step::Release(shift),
        Step::Press(Key::Character('c')),
        Step::Release(Key::Character('c')),
        Step::Release(ctrl),
        Step::Click(Point::new(250.0, 98.0)),
        Step::Type(" "),
        Step::Press(ctrl),
        Step::Press(Key::Character('v')),
        Step::Release(Key::Character('v')),
        Step::Release(ctrl),
        Step::Click(Point::new(80.0, 40.0)),
    ];

    for step in script {
        app.run(step);
    }

    println!("text:        {:?}", app.name.text());
    println!("cursor:      {}", app.name.cursor());
    println!("clipboard:   {:?}", app.clipboard.contents());
    println!("submissions: {}", app.submissions);
    println!("last frame:");
    app.print_frame();
}
