//! Button component for interactive UI
//!
//! A rectangle with a label that reports a click. Buttons keep no state
//! between frames.

use crate::decoration::{draw_outlined_box, Outline};
use lumen_gui::{
    catppuccin::mocha, Color, CursorIcon, FontId, InputSnapshot, MouseButton, Point, Rect,
    UiContext,
};
use lumen_gui_macros::WithBuilders;

/// Gap between the button edge and a left or right aligned label
const LABEL_INSET: f32 = 5.0;

/// Horizontal placement of a button label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Visual styling for a button
#[derive(Debug, Clone, WithBuilders)]
pub struct ButtonStyle {
    /// Background color when idle
    pub base_background_color: Color,
    /// Label color when idle
    pub base_text_color: Color,
    /// Outline color when idle
    pub base_outline_color: Color,
    /// Background color when hovered
    pub hover_background_color: Color,
    /// Label color when hovered
    pub hover_text_color: Color,
    /// Outline color when hovered
    pub hover_outline_color: Color,

    #[with_builders(into)]
    pub font: FontId,
    pub font_size: f32,
    pub text_align: TextAlign,
    /// Corner roundness in [0, 1]
    pub roundness: f32,
    pub outline_thickness: f32,
    /// Gap between the button body and its outline
    pub outline_distance: f32,
    /// Draw the outline as a filled backing box instead of a stroke
    pub outline_fill: bool,
    /// Uniform scale applied to the drawn body while hovered
    pub hover_scale: f32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            // Idle
            base_background_color: mocha::BASE,
            base_text_color: mocha::TEXT,
            base_outline_color: mocha::SURFACE0,
            // Hover
            hover_background_color: mocha::MANTLE,
            hover_text_color: mocha::TEXT,
            hover_outline_color: mocha::LAVENDER,
            // Others
            font: FontId::default(),
            font_size: 20.0,
            text_align: TextAlign::Center,
            roundness: 0.3,
            outline_thickness: 1.0,
            outline_distance: 2.0,
            outline_fill: false,
            hover_scale: 1.05,
        }
    }
}

/// A clickable button
///
/// # Example
///
/// ```ignore
/// let save = Button::new(Rect::from_xywh(20.0, 20.0, 120.0, 40.0), "Save");
///
/// // every frame
/// if save.update_and_render(&mut snapshot, &mut ui) {
///     document.save();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Button {
    bounds: Rect,
    style: ButtonStyle,
    label: String,
}

impl Button {
    /// Create a new button with the given bounds and label
    pub fn new(bounds: Rect, label: impl Into<String>) -> Self {
        Self {
            bounds,
            style: ButtonStyle::default(),
            label: label.into(),
        }
    }

    /// Set a custom style for the button
    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// Update hover/click state for this frame and draw the button.
    ///
    /// Returns `true` if the button claimed this frame's click.
    pub fn update_and_render(&self, snapshot: &mut InputSnapshot, ui: &mut UiContext<'_>) -> bool {
        let style = &self.style;
        let hovered = self.bounds.contains(snapshot.pointer);
        let mut clicked = false;

        let (background, outline_color, text_color, body) = if hovered {
            snapshot.request_cursor(CursorIcon::PointingHand);
            clicked = snapshot.try_claim_click(ui.is_button_just_pressed(MouseButton::Left));
            if clicked {
                log::debug!("button '{}' clicked", self.label);
            }

            (
                style.hover_background_color,
                style.hover_outline_color,
                style.hover_text_color,
                self.bounds.scale_about_center(style.hover_scale),
            )
        } else {
            (
                style.base_background_color,
                style.base_outline_color,
                style.base_text_color,
                self.bounds,
            )
        };

        draw_outlined_box(
            ui,
            body,
            style.roundness,
            Outline {
                color: outline_color,
                thickness: style.outline_thickness,
                distance: style.outline_distance,
                fill: style.outline_fill,
            },
            background,
        );

        let position = self.label_position(ui);
        ui.draw_text(&self.label, position, style.font, style.font_size, text_color);

        clicked
    }

    /// Label origin, laid out against the unscaled bounds
    fn label_position(&self, ui: &mut UiContext<'_>) -> Point {
        let style = &self.style;
        let y = self.bounds.y() + self.bounds.height() / 2.0 - style.font_size / 2.0;
        let x = match style.text_align {
            TextAlign::Left => self.bounds.x() + LABEL_INSET,
            TextAlign::Center => {
                let width = ui.measure_text(&self.label, style.font, style.font_size);
                self.bounds.x() + self.bounds.width() / 2.0 - width / 2.0
            }
            TextAlign::Right => {
                let width = ui.measure_text(&self.label, style.font, style.font_size);
                self.bounds.x() + self.bounds.width() - LABEL_INSET - width
            }
        };
        Point::new(x, y)
    }
}
