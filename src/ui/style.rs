/// Colors and widget styles shared by the page and the gallery
use iced::widget::{button, container};
use iced::{font, Background, Border, Color, Font, Shadow, Theme, Vector};

pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

pub const INK: Color = Color::from_rgb(0.07, 0.09, 0.15);
pub const MUTED: Color = Color::from_rgb(0.42, 0.45, 0.50);
pub const PAPER: Color = Color::WHITE;
pub const MIST: Color = Color::from_rgb(0.976, 0.98, 0.984);
pub const ACCENT: Color = Color::from_rgb(0.23, 0.51, 0.96);
pub const CHECK: Color = Color::from_rgb(0.13, 0.77, 0.37);
pub const NIGHT: Color = Color::from_rgb(0.07, 0.09, 0.15);

fn rounded(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        ..Border::default()
    }
}

pub fn band(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(INK),
        ..container::Style::default()
    }
}

pub fn nav_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.94, ..PAPER })),
        border: Border {
            color: Color::from_rgb(0.9, 0.91, 0.92),
            width: 1.0,
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub fn hero_shade(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.4, ..Color::BLACK })),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

pub fn card(highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(PAPER)),
        text_color: Some(INK),
        border: Border {
            color: if highlighted { ACCENT } else { Color::from_rgb(0.9, 0.91, 0.92) },
            width: 2.0,
            radius: 10.0.into(),
        },
        shadow: Shadow {
            color: Color { a: 0.08, ..Color::BLACK },
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
    }
}

pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.88, 0.89, 0.91))),
        text_color: Some(MUTED),
        ..container::Style::default()
    }
}

pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Some(Color::WHITE),
        border: rounded(12.0),
        ..container::Style::default()
    }
}

pub fn callout(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.94, 0.96, 1.0))),
        text_color: Some(INK),
        border: rounded(10.0),
        ..container::Style::default()
    }
}

pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.9, ..Color::BLACK })),
        ..container::Style::default()
    }
}

pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let text_color = match (active, status) {
            (true, _) | (false, button::Status::Hovered) => INK,
            _ => MUTED,
        };
        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active { INK } else { Color::TRANSPARENT },
                width: if active { 1.0 } else { 0.0 },
                radius: 6.0.into(),
            },
            ..button::Style::default()
        }
    }
}

/// Solid call to action
pub fn solid(background: Color, text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color { a: 0.85, ..background },
            _ => background,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: rounded(8.0),
            ..button::Style::default()
        }
    }
}

/// Outlined call to action on the dark hero
pub fn outline(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (Some(Background::Color(Color::WHITE)), INK),
        _ => (None, Color::WHITE),
    };
    button::Style {
        background,
        text_color,
        border: Border {
            color: Color::WHITE,
            width: 2.0,
            radius: 8.0.into(),
        },
        ..button::Style::default()
    }
}

pub fn project_card(_theme: &Theme, status: button::Status) -> button::Style {
    let blur_radius = match status {
        button::Status::Hovered => 28.0,
        _ => 12.0,
    };
    button::Style {
        background: Some(Background::Color(PAPER)),
        text_color: INK,
        border: rounded(10.0),
        shadow: Shadow {
            color: Color { a: 0.12, ..Color::BLACK },
            offset: Vector::new(0.0, 4.0),
            blur_radius,
        },
    }
}

pub fn link(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => INK,
            _ => color,
        },
        ..button::Style::default()
    }
}

pub fn overlay_control(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => Color::from_rgb(0.82, 0.84, 0.86),
            _ => Color::WHITE,
        },
        ..button::Style::default()
    }
}

pub fn thumbnail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, _status| button::Style {
        background: None,
        border: Border {
            color: if selected { Color::WHITE } else { Color::TRANSPARENT },
            width: 2.0,
            radius: 8.0.into(),
        },
        ..button::Style::default()
    }
}
