//! The Farfly showcase application, built with eframe/egui.
//!
//! [`Viewer`] glues together:
//! - The animated particle backdrop ([`Background`]).
//! - The boot gate shown for a fixed delay after startup.
//! - Page routing over the finite set of [`Page`] states.
//! - The per-page UI state (HUD tab, viewport selection).
//!
//! All views are plain egui composition over static copy; everything that
//! moves on screen derives from egui's frame time.

use eframe::App;
use egui::{
    Align, Align2, Button, Color32, CornerRadius, FontId, Frame, Layout, Margin, RichText,
    ScrollArea, Sense, Stroke, StrokeKind,
};

use crate::background::Background;
use crate::pages::{self, DRONE_VIEWS, HudMode, Page};
use crate::theme;

/// Seconds the boot screen stays up before the main views appear.
const BOOT_SECS: f64 = 1.5;

/// True once the boot gate has elapsed.
fn boot_done(time: f64) -> bool {
    time >= BOOT_SECS
}

/// Main application state.
pub struct Viewer {
    page: Page,
    background: Background,
    hud: HudMode,
    /// Selected drone viewport thumbnail; `None` shows the default view.
    active_view: Option<usize>,
}

impl Viewer {
    pub fn new() -> Self {
        tracing::info!("farfly viewer starting");
        Self {
            page: Page::Home,
            background: Background::new(),
            hud: HudMode::Commute,
            active_view: None,
        }
    }

    /// The single page-transition path; there is no history stack.
    fn go_to(&mut self, page: Page) {
        if page != self.page {
            tracing::info!(from = ?self.page, to = ?page, "page transition");
            self.page = page;
        }
    }

    // ---- boot screen ----

    fn ui_boot(&self, ctx: &egui::Context, time: f64) {
        egui::CentralPanel::default()
            .frame(Frame::new().fill(theme::NIGHT))
            .show(ctx, |ui| {
                let center = ui.max_rect().center();
                let painter = ui.painter();
                let t = time as f32;

                spinner_arc(painter, center, 40.0, t * 3.2, theme::ORANGE);
                spinner_arc(painter, center, 30.0, -t * 4.1, theme::CYAN);

                let pulse = 0.55 + 0.45 * (t * 4.0).sin().abs();
                painter.text(
                    center + egui::vec2(0.0, 78.0),
                    Align2::CENTER_CENTER,
                    "I N I T I A L I Z I N G   F A R F L Y ...",
                    FontId::monospace(13.0),
                    theme::WHITE.gamma_multiply(pulse),
                );
            });
        ctx.request_repaint();
    }

    // ---- home ----

    fn ui_home(&mut self, ctx: &egui::Context, t: f32) {
        self.ui_navbar(ctx);
        egui::CentralPanel::default()
            .frame(Frame::new())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.ui_hero(ui, t);
                        self.ui_ark_section(ui);
                        self.ui_drone_section(ui);
                        Self::ui_daily_section(ui, t);
                        ui_footer(ui, t);
                    });
            });
    }

    fn ui_navbar(&mut self, ctx: &egui::Context) {
        let frame = Frame::new()
            .fill(theme::NIGHT.gamma_multiply(0.85))
            .inner_margin(Margin::symmetric(24, 14));
        egui::TopBottomPanel::top("navbar").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                let brand = Button::new(
                    RichText::new("FARFLY").size(20.0).strong().color(theme::WHITE),
                )
                .frame(false);
                if ui.add(brand).clicked() {
                    self.go_to(Page::Home);
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    // Right-to-left layout, so entries are declared reversed.
                    inert_entry(ui, "RESERVE");
                    inert_entry(ui, "DAILY LOG");
                    if nav_entry(ui, "AIRCRAFT").clicked() {
                        self.go_to(Page::Drone);
                    }
                    if nav_entry(ui, "ARK BASE").clicked() {
                        self.go_to(Page::Ark);
                    }
                });
            });
        });
    }

    fn ui_hero(&mut self, ui: &mut egui::Ui, t: f32) {
        ui.add_space((ui.available_height() * 0.16).max(56.0));
        ui.vertical_centered(|ui| {
            let pulse = theme::ORANGE.gamma_multiply(0.6 + 0.4 * (t * 3.0).sin().abs());
            ui.label(
                RichText::new("●   P R O J E C T   F A R F L Y   ●")
                    .size(12.0)
                    .color(pulse),
            );
            ui.add_space(14.0);
            ui.label(
                RichText::new("FARFLY FUTURE")
                    .size(72.0)
                    .strong()
                    .color(theme::WHITE),
            );
            ui.add_space(6.0);
            ui.label(
                RichText::new("EXISTENCE  IS  EXPLORATION")
                    .size(18.0)
                    .color(theme::MUTED),
            );
            ui.add_space(22.0);
            ui.label(
                RichText::new(
                    "COORDS 34.0522 N, 118.2437 W      STATUS OPTIMAL      LINK ESTABLISHED",
                )
                .monospace()
                .size(11.0)
                .color(theme::DIM),
            );
            ui.add_space(30.0);

            ui.allocate_ui_with_layout(
                egui::vec2(440.0, 52.0),
                Layout::left_to_right(Align::Center),
                |ui| {
                    let reserve = Button::new(
                        RichText::new("RESERVE A FLIGHT").strong().color(theme::WHITE),
                    )
                    .fill(theme::ORANGE)
                    .min_size(egui::vec2(205.0, 46.0));
                    // Reservations are not wired up; the button is decorative.
                    ui.add(reserve);

                    ui.add_space(16.0);

                    let explore = Button::new(
                        RichText::new("EXPLORE THE BASE").strong().color(theme::WHITE),
                    )
                    .fill(Color32::TRANSPARENT)
                    .stroke(Stroke::new(1.0, theme::white_alpha(80)))
                    .min_size(egui::vec2(205.0, 46.0));
                    if ui.add(explore).clicked() {
                        self.go_to(Page::Ark);
                    }
                },
            );

            ui.add_space(56.0);
            let hint = theme::CYAN.gamma_multiply(0.3 + 0.35 * (t * 2.0).sin().abs());
            ui.label(RichText::new("SCROLL TO EXPLORE").size(10.0).color(hint));
            ui.label(RichText::new("│").size(16.0).color(hint));
        });
        ui.add_space(48.0);
    }

    fn ui_ark_section(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        centered_column(ui, 980.0, |ui| {
            ui.columns(2, |cols| {
                if media_panel(&mut cols[0], 230.0, "◉ SECTOR 01", "ARK BASE", theme::CYAN)
                    .clicked()
                {
                    self.go_to(Page::Ark);
                }

                let ui = &mut cols[1];
                ui.label(RichText::new("Ark Base").size(30.0).strong().color(theme::WHITE));
                ui.add_space(6.0);
                ui.label(
                    RichText::new("▌ Subsurface research station and life harbor")
                        .size(15.0)
                        .color(theme::ORANGE),
                );
                ui.add_space(10.0);
                ui.label(
                    RichText::new(
                        "A self-cycling ecosystem buried deep below the surface: a research \
                         outpost first, and an ark for whatever comes after. Fully independent \
                         energy and water loops keep life running through any conditions \
                         outside.",
                    )
                    .size(13.0)
                    .color(theme::MUTED),
                );
                ui.add_space(14.0);
                let more = Button::new(
                    RichText::new("LEARN MORE  ❯").strong().size(13.0).color(theme::WHITE),
                )
                .frame(false);
                if ui.add(more).clicked() {
                    self.go_to(Page::Ark);
                }
            });
        });
    }

    fn ui_drone_section(&mut self, ui: &mut egui::Ui) {
        ui.add_space(56.0);
        centered_column(ui, 980.0, |ui| {
            ui.columns(2, |cols| {
                {
                    let ui = &mut cols[0];
                    ui.label(
                        RichText::new("Messenger Aircraft")
                            .size(30.0)
                            .strong()
                            .color(theme::WHITE),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new("▌ An extension of your senses, a node on the move")
                            .size(15.0)
                            .color(theme::CYAN),
                    );
                    ui.add_space(10.0);
                    ui.label(
                        RichText::new(
                            "The Messenger is more than transport: a second pair of eyes with \
                             a high-precision sensor array and neural-link co-piloting, so the \
                             world outside the Ark is never out of reach.",
                        )
                        .size(13.0)
                        .color(theme::MUTED),
                    );
                    ui.add_space(14.0);
                    let more = Button::new(
                        RichText::new("LEARN MORE  ❯").strong().size(13.0).color(theme::WHITE),
                    )
                    .frame(false);
                    if ui.add(more).clicked() {
                        self.go_to(Page::Drone);
                    }
                }

                if media_panel(
                    &mut cols[1],
                    230.0,
                    "≋ UNIT: MESSENGER",
                    "MESSENGER",
                    theme::ORANGE,
                )
                .clicked()
                {
                    self.go_to(Page::Drone);
                }
            });
        });
    }

    fn ui_daily_section(ui: &mut egui::Ui, t: f32) {
        ui.add_space(56.0);
        centered_column(ui, 980.0, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("▮").size(24.0).color(theme::ORANGE));
                ui.label(
                    RichText::new("Daily Image Log")
                        .size(24.0)
                        .strong()
                        .color(theme::WHITE),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let pulse = theme::ORANGE.gamma_multiply(0.5 + 0.5 * (t * 3.0).sin().abs());
                    ui.label(
                        RichText::new("UPLINK ACTIVE  ⬤").monospace().size(12.0).color(pulse),
                    );
                });
            });
            ui.add_space(12.0);

            let width = ui.available_width();
            let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 240.0), Sense::hover());
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, CornerRadius::same(10), theme::PANEL_DARK);
            painter.rect_stroke(
                rect,
                CornerRadius::same(10),
                Stroke::new(1.0, theme::white_alpha(26)),
                StrokeKind::Inside,
            );

            let mono = FontId::monospace(12.0);
            let pad = 18.0;
            painter.text(
                rect.left_top() + egui::vec2(pad, pad),
                Align2::LEFT_TOP,
                "LOG: #8921-A",
                mono.clone(),
                theme::CYAN,
            );
            painter.text(
                rect.right_top() + egui::vec2(-pad, pad),
                Align2::RIGHT_TOP,
                "CAM-04 [EXTERIOR]",
                mono.clone(),
                theme::CYAN,
            );

            let c = rect.center();
            let ch = theme::white_alpha(40);
            painter.line_segment(
                [c - egui::vec2(26.0, 0.0), c + egui::vec2(26.0, 0.0)],
                Stroke::new(1.0, ch),
            );
            painter.line_segment(
                [c - egui::vec2(0.0, 26.0), c + egui::vec2(0.0, 26.0)],
                Stroke::new(1.0, ch),
            );
            painter.circle_stroke(c, 38.0, Stroke::new(1.0, ch));

            painter.text(
                rect.left_bottom() + egui::vec2(pad, -54.0),
                Align2::LEFT_BOTTOM,
                "2030.12.23 | 14:00",
                FontId::proportional(17.0),
                theme::WHITE,
            );
            painter.text(
                rect.left_bottom() + egui::vec2(pad, -30.0),
                Align2::LEFT_BOTTOM,
                "COORDS: 42.102, -73.221",
                mono.clone(),
                theme::ORANGE,
            );
            painter.text(
                rect.right_bottom() + egui::vec2(-pad, -30.0),
                Align2::RIGHT_BOTTOM,
                "> perimeter EM flux nominal · air quality optimal · syncing to core archive...",
                mono,
                theme::MUTED,
            );

            // Uplink level bars, bottom right.
            for i in 0..10 {
                let phase = t * 3.0 + i as f32 * 0.9;
                let h = 10.0 + 24.0 * (0.5 + 0.5 * phase.sin());
                let x = rect.right() - pad - (10 - i) as f32 * 9.0;
                let bar = egui::Rect::from_min_max(
                    egui::pos2(x, rect.bottom() - 56.0 - h),
                    egui::pos2(x + 5.0, rect.bottom() - 56.0),
                );
                painter.rect_filled(bar, CornerRadius::ZERO, theme::ORANGE.gamma_multiply(0.7));
            }
        });
    }

    // ---- ark detail ----

    fn ui_ark_page(&mut self, ctx: &egui::Context) {
        let header = Frame::new()
            .fill(theme::NIGHT.gamma_multiply(0.95))
            .inner_margin(Margin::symmetric(20, 12));
        egui::TopBottomPanel::top("ark_header")
            .frame(header)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("◉").size(18.0).color(theme::ORANGE));
                    ui.label(
                        RichText::new("ARK BASE // DETAIL")
                            .size(18.0)
                            .strong()
                            .color(theme::WHITE),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let back = Button::new(
                            RichText::new("BACK TO SURFACE  ✕").size(12.0).color(theme::MUTED),
                        )
                        .frame(false);
                        if ui.add(back).clicked() {
                            self.go_to(Page::Home);
                        }
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(Frame::new().fill(theme::NIGHT_DEEP))
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui_ark_banner(ui);
                        ui.add_space(36.0);
                        centered_column(ui, 980.0, |ui| {
                            ui.columns(2, |cols| {
                                {
                                    let ui = &mut cols[0];
                                    ui.label(
                                        RichText::new("⛨  Closed Ecology Loop")
                                            .size(24.0)
                                            .strong()
                                            .color(theme::WHITE),
                                    );
                                    ui.add_space(10.0);
                                    ui.label(
                                        RichText::new(
                                            "The Ark core pairs a third-generation \
                                             photosynthesis simulator with a water purification \
                                             matrix, closing more than 98% of its material loop. \
                                             Cut off from all outside supply, the base sustains \
                                             five hundred people for fifty years.",
                                        )
                                        .size(13.0)
                                        .color(theme::MUTED),
                                    );
                                    ui.add_space(12.0);
                                    ui.horizontal(|ui| {
                                        chip(ui, "O2 LEVEL: 21%", theme::CYAN);
                                        chip(ui, "HUMIDITY: 45%", theme::CYAN);
                                    });
                                }
                                media_panel(
                                    &mut cols[1],
                                    200.0,
                                    "SYSTEM SCHEMATIC V.3.0",
                                    "Closed-loop core",
                                    theme::CYAN,
                                );
                            });

                            ui.add_space(40.0);
                            ui.label(
                                RichText::new("▌ Core Function Zones")
                                    .size(20.0)
                                    .strong()
                                    .color(theme::WHITE),
                            );
                            ui.add_space(14.0);
                            ui.columns(3, |cols| {
                                zone_card(&mut cols[0], "Energy Core", "OUTPUT: 5GW");
                                zone_card(&mut cols[1], "Eco Farm", "YIELD: 12T/DAY");
                                zone_card(&mut cols[2], "Habitat Ring", "CAPACITY: 500");
                            });

                            ui.add_space(40.0);
                            ui.vertical_centered(|ui| {
                                let book = Button::new(
                                    RichText::new("BOOK A VISIT").strong().color(theme::WHITE),
                                )
                                .fill(theme::ORANGE)
                                .min_size(egui::vec2(220.0, 46.0));
                                ui.add(book);

                                ui.add_space(10.0);
                                let meet = Button::new(
                                    RichText::new("MEET THE AIRCRAFT")
                                        .strong()
                                        .color(theme::ORANGE),
                                )
                                .fill(Color32::TRANSPARENT)
                                .stroke(Stroke::new(1.0, theme::ORANGE.gamma_multiply(0.6)))
                                .min_size(egui::vec2(220.0, 40.0));
                                if ui.add(meet).clicked() {
                                    self.go_to(Page::Drone);
                                }
                            });
                            ui.add_space(48.0);
                        });
                    });
            });
    }

    // ---- drone detail ----

    fn ui_drone_page(&mut self, ctx: &egui::Context, t: f32) {
        let header = Frame::new()
            .fill(theme::NIGHT.gamma_multiply(0.95))
            .inner_margin(Margin::symmetric(20, 12));
        egui::TopBottomPanel::top("drone_header")
            .frame(header)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("≋").size(18.0).color(theme::CYAN));
                    ui.label(
                        RichText::new("MESSENGER // SYSTEM")
                            .size(18.0)
                            .strong()
                            .color(theme::WHITE),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let back =
                            Button::new(RichText::new("✕").size(14.0).color(theme::MUTED))
                                .frame(false);
                        if ui.add(back).clicked() {
                            self.go_to(Page::Home);
                        }
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(Frame::new().fill(theme::NIGHT))
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(20.0);
                        centered_column(ui, 1100.0, |ui| {
                            ui.columns(2, |cols| {
                                {
                                    let ui = &mut cols[0];
                                    self.ui_drone_viewport(ui);
                                    ui.add_space(16.0);
                                    ui_drone_architecture(ui);
                                }
                                self.ui_hud(&mut cols[1], t);
                            });
                        });
                        ui.add_space(32.0);
                    });
            });
    }

    fn ui_drone_viewport(&mut self, ui: &mut egui::Ui) {
        let view = pages::current_view(self.active_view);
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 240.0), Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, CornerRadius::same(10), Color32::BLACK);
        painter.rect_stroke(
            rect,
            CornerRadius::same(10),
            Stroke::new(1.0, theme::CYAN.gamma_multiply(0.35)),
            StrokeKind::Inside,
        );
        painter.text(
            rect.left_bottom() + egui::vec2(18.0, -42.0),
            Align2::LEFT_BOTTOM,
            format!("VIEW MODE: {}", view.caption),
            FontId::monospace(11.0),
            theme::CYAN,
        );
        painter.text(
            rect.left_bottom() + egui::vec2(18.0, -14.0),
            Align2::LEFT_BOTTOM,
            view.title,
            FontId::proportional(26.0),
            theme::WHITE,
        );

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            for (idx, v) in DRONE_VIEWS.iter().enumerate() {
                let selected = self.active_view == Some(idx);
                let label = RichText::new(format!("{}. {}", idx + 1, v.title)).size(11.0);
                if ui.selectable_label(selected, label).clicked() {
                    self.active_view = pages::toggle_view(self.active_view, idx);
                }
            }
        });
    }

    fn ui_hud(&mut self, ui: &mut egui::Ui, t: f32) {
        Frame::new()
            .fill(Color32::BLACK)
            .stroke(Stroke::new(1.0, theme::white_alpha(50)))
            .corner_radius(CornerRadius::same(10))
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("HUD SIMULATOR").size(12.0).strong().color(theme::WHITE),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let pulse = theme::RED.gamma_multiply(0.5 + 0.5 * (t * 5.0).sin().abs());
                        ui.label(
                            RichText::new("LIVE FEED ⬤").monospace().size(10.0).color(pulse),
                        );
                    });
                });
                ui.separator();

                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        for mode in HudMode::ALL {
                            let selected = self.hud == mode;
                            let accent = hud_accent(mode);
                            let glyph = RichText::new(mode.glyph()).size(16.0).color(
                                if selected { accent } else { theme::DIM },
                            );
                            if ui.selectable_label(selected, glyph).clicked() {
                                self.hud = mode;
                            }
                            ui.add_space(6.0);
                        }
                    });
                    ui.separator();

                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            chip(ui, &format!("MODE: {}", self.hud.label()), hud_accent(self.hud));
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(
                                    RichText::new("BAT 84%   LINK 5G+")
                                        .monospace()
                                        .size(10.0)
                                        .color(theme::GREY),
                                );
                            });
                        });
                        ui.add_space(8.0);

                        match self.hud {
                            HudMode::Commute => ui_hud_commute(ui),
                            HudMode::Sightseeing => ui_hud_sightseeing(ui),
                            HudMode::Emergency => ui_hud_emergency(ui, t),
                        }

                        ui.add_space(10.0);
                        ui.columns(3, |cols| {
                            cols[0].label(
                                RichText::new("ALT: 450M\nSPD: 120KM/H")
                                    .monospace()
                                    .size(10.0)
                                    .color(theme::white_alpha(180)),
                            );
                            cols[1].vertical_centered(|ui| {
                                ui.add(
                                    egui::ProgressBar::new(0.66)
                                        .desired_width(90.0)
                                        .fill(theme::CYAN),
                                );
                                ui.label(
                                    RichText::new("THRUST").monospace().size(9.0).color(theme::CYAN),
                                );
                            });
                            cols[2].with_layout(Layout::top_down(Align::Max), |ui| {
                                ui.label(
                                    RichText::new("WIND: NW 12\nTEMP: 24°C")
                                        .monospace()
                                        .size(10.0)
                                        .color(theme::white_alpha(180)),
                                );
                            });
                        });
                    });
                });
            });
    }
}

impl App for Viewer {
    /// eframe callback that runs one application frame.
    ///
    /// Until the boot gate elapses only the boot screen is shown; after
    /// that the backdrop field mounts and the current page is rendered on
    /// top of it.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let time = ctx.input(|i| i.time);
        if !boot_done(time) {
            self.ui_boot(ctx, time);
            return;
        }

        self.background.frame(ctx);

        let t = time as f32;
        match self.page {
            Page::Home => self.ui_home(ctx, t),
            Page::Ark => self.ui_ark_page(ctx),
            Page::Drone => self.ui_drone_page(ctx, t),
        }
    }
}

// ---- shared drawing helpers ----

fn spinner_arc(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    start: f32,
    color: Color32,
) {
    use std::f32::consts::TAU;
    let segments = 48;
    let sweep = TAU * 0.72;
    let points: Vec<egui::Pos2> = (0..=segments)
        .map(|i| {
            let a = start + sweep * (i as f32) / (segments as f32);
            egui::pos2(center.x + a.cos() * radius, center.y + a.sin() * radius)
        })
        .collect();
    painter.add(egui::Shape::line(points, Stroke::new(3.0, color)));
}

/// Lays `add` out in a column of at most `max_width`, horizontally centered
/// in the available space, keeping the content itself left-aligned.
fn centered_column<R>(
    ui: &mut egui::Ui,
    max_width: f32,
    add: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let pad = ((ui.available_width() - max_width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(pad);
        ui.vertical(|ui| {
            ui.set_max_width(max_width);
            add(ui)
        })
        .inner
    })
    .inner
}

fn nav_entry(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(Button::new(RichText::new(label).size(13.0).strong().color(theme::GREY)).frame(false))
}

fn inert_entry(ui: &mut egui::Ui, label: &str) {
    ui.add(Button::new(RichText::new(label).size(13.0).color(theme::DIM)).frame(false));
}

/// A framed stand-in for a photographic panel: dark fill, faint scanlines,
/// tag and title in the lower-left corner. Highlights on hover and reports
/// clicks.
fn media_panel(
    ui: &mut egui::Ui,
    height: f32,
    tag: &str,
    title: &str,
    accent: Color32,
) -> egui::Response {
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), Sense::click());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, CornerRadius::same(8), theme::PANEL);
    let stroke = if response.hovered() {
        accent
    } else {
        theme::white_alpha(26)
    };
    painter.rect_stroke(
        rect,
        CornerRadius::same(8),
        Stroke::new(1.0, stroke),
        StrokeKind::Inside,
    );

    let mut y = rect.top() + 18.0;
    while y < rect.bottom() - 8.0 {
        painter.line_segment(
            [
                egui::pos2(rect.left() + 10.0, y),
                egui::pos2(rect.right() - 10.0, y),
            ],
            Stroke::new(0.5, theme::white_alpha(8)),
        );
        y += 18.0;
    }

    painter.text(
        egui::pos2(rect.left() + 18.0, rect.bottom() - 46.0),
        Align2::LEFT_BOTTOM,
        tag,
        FontId::monospace(11.0),
        accent,
    );
    painter.text(
        egui::pos2(rect.left() + 18.0, rect.bottom() - 16.0),
        Align2::LEFT_BOTTOM,
        title,
        FontId::proportional(22.0),
        theme::WHITE,
    );

    response
}

fn ui_ark_banner(ui: &mut egui::Ui) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 260.0), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, CornerRadius::ZERO, theme::PANEL_DARK);

    let inner = rect.shrink(24.0);
    painter.rect_stroke(
        inner,
        CornerRadius::ZERO,
        Stroke::new(1.0, theme::white_alpha(40)),
        StrokeKind::Inside,
    );
    let tick = 26.0;
    let s = Stroke::new(2.0, theme::ORANGE);
    for (corner, dx, dy) in [
        (inner.left_top(), 1.0, 1.0),
        (inner.right_top(), -1.0, 1.0),
        (inner.left_bottom(), 1.0, -1.0),
        (inner.right_bottom(), -1.0, -1.0),
    ] {
        painter.line_segment([corner, corner + egui::vec2(dx * tick, 0.0)], s);
        painter.line_segment([corner, corner + egui::vec2(0.0, dy * tick)], s);
    }

    painter.text(
        egui::pos2(inner.left() + 22.0, inner.bottom() - 52.0),
        Align2::LEFT_BOTTOM,
        "SECTOR 01",
        FontId::proportional(44.0),
        theme::WHITE,
    );
    painter.text(
        egui::pos2(inner.left() + 22.0, inner.bottom() - 20.0),
        Align2::LEFT_BOTTOM,
        "DEPTH: -1200M // PRESSURE: 120ATM",
        FontId::monospace(14.0),
        theme::CYAN,
    );
}

fn chip(ui: &mut egui::Ui, text: &str, accent: Color32) {
    Frame::new()
        .fill(accent.gamma_multiply(0.08))
        .stroke(Stroke::new(1.0, accent.gamma_multiply(0.4)))
        .inner_margin(Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.label(RichText::new(text).monospace().size(11.0).color(accent));
        });
}

fn zone_card(ui: &mut egui::Ui, title: &str, param: &str) {
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, 210.0), Sense::click());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, CornerRadius::same(10), theme::PANEL);
    let stroke = if response.hovered() {
        theme::ORANGE
    } else {
        theme::white_alpha(26)
    };
    painter.rect_stroke(
        rect,
        CornerRadius::same(10),
        Stroke::new(1.0, stroke),
        StrokeKind::Inside,
    );

    let title_y = if response.hovered() { 44.0 } else { 18.0 };
    painter.text(
        egui::pos2(rect.left() + 16.0, rect.bottom() - title_y),
        Align2::LEFT_BOTTOM,
        title,
        FontId::proportional(20.0),
        theme::WHITE,
    );
    if response.hovered() {
        painter.text(
            egui::pos2(rect.left() + 16.0, rect.bottom() - 18.0),
            Align2::LEFT_BOTTOM,
            param,
            FontId::monospace(12.0),
            theme::ORANGE,
        );
    }
}

fn ui_drone_architecture(ui: &mut egui::Ui) {
    Frame::new()
        .fill(theme::PANEL)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(14))
        .show(ui, |ui| {
            ui.label(
                RichText::new("▣ System Architecture").size(15.0).strong().color(theme::WHITE),
            );
            ui.add_space(10.0);
            ui.columns(4, |cols| {
                for (ui, step) in cols.iter_mut().zip(["WAKE", "BOOK", "FLY", "LAND"]) {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("⬤").size(10.0).color(theme::CYAN));
                        ui.label(RichText::new(step).monospace().size(10.0).color(theme::MUTED));
                    });
                }
            });
            ui.add_space(10.0);
            ui.columns(3, |cols| {
                layer_card(&mut cols[0], "OriginOS", "interaction layer", theme::CYAN);
                layer_card(&mut cols[1], "Cloud Brain", "dispatch layer", theme::BLUE);
                layer_card(&mut cols[2], "Hardware", "execution layer", theme::ORANGE);
            });
        });
}

fn layer_card(ui: &mut egui::Ui, name: &str, role: &str, accent: Color32) {
    Frame::new()
        .fill(accent.gamma_multiply(0.06))
        .stroke(Stroke::new(1.0, accent.gamma_multiply(0.3)))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(name).strong().size(13.0).color(accent));
                ui.label(RichText::new(role).size(10.0).color(theme::DIM));
            });
        });
}

fn hud_accent(mode: HudMode) -> Color32 {
    match mode {
        HudMode::Commute => theme::GREEN,
        HudMode::Sightseeing => theme::AMBER,
        HudMode::Emergency => theme::RED,
    }
}

fn ui_hud_commute(ui: &mut egui::Ui) {
    ui.add_space(14.0);
    ui.vertical_centered(|ui| {
        Frame::new()
            .fill(theme::GREEN.gamma_multiply(0.07))
            .stroke(Stroke::new(1.0, theme::GREEN.gamma_multiply(0.4)))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(Margin::symmetric(28, 18))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("08:45 AM")
                            .monospace()
                            .size(24.0)
                            .strong()
                            .color(theme::GREEN),
                    );
                    ui.label(
                        RichText::new("ETA: 12 MINS")
                            .monospace()
                            .size(10.0)
                            .color(theme::GREEN.gamma_multiply(0.8)),
                    );
                });
            });
    });
    ui.add_space(14.0);
}

fn ui_hud_sightseeing(ui: &mut egui::Ui) {
    ui.add_space(20.0);
    ui.horizontal(|ui| {
        ui.add_space(30.0);
        ui.label(RichText::new("◈").color(theme::AMBER));
        Frame::new()
            .fill(Color32::BLACK.gamma_multiply(0.6))
            .stroke(Stroke::new(1.0, theme::AMBER.gamma_multiply(0.5)))
            .inner_margin(Margin::same(8))
            .show(ui, |ui| {
                ui.set_max_width(180.0);
                ui.label(
                    RichText::new("ANCIENT TOWER").size(11.0).strong().color(theme::WHITE),
                );
                ui.label(
                    RichText::new("Early 21st-century landmark, preserved ruin site.")
                        .size(9.0)
                        .color(theme::MUTED),
                );
            });
    });
    ui.add_space(20.0);
}

fn ui_hud_emergency(ui: &mut egui::Ui, t: f32) {
    let pulse = 0.5 + 0.5 * (t * 6.0).sin().abs();
    ui.add_space(10.0);
    Frame::new()
        .stroke(Stroke::new(2.0, theme::RED.gamma_multiply(0.35 + 0.4 * pulse)))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("⚠").size(26.0).color(theme::RED));
                ui.label(RichText::new("WARNING").size(16.0).strong().color(theme::WHITE));
                ui.label(
                    RichText::new("OBSTACLE DETECTED")
                        .monospace()
                        .size(10.0)
                        .color(theme::RED.gamma_multiply(0.6 + 0.4 * pulse)),
                );
                ui.label(
                    RichText::new("REROUTING...")
                        .monospace()
                        .size(10.0)
                        .color(theme::RED.gamma_multiply(0.6 + 0.4 * pulse)),
                );
            });
        });
    ui.add_space(10.0);
}

// ---- footer ----

fn ui_footer(ui: &mut egui::Ui, t: f32) {
    ui.add_space(64.0);
    centered_column(ui, 980.0, |ui| {
        ui.separator();
        ui.add_space(24.0);
        ui.columns(4, |cols| {
            {
                let ui = &mut cols[0];
                ui.label(RichText::new("FARFLY").size(18.0).strong().color(theme::WHITE));
                ui.add_space(8.0);
                ui.label(
                    RichText::new(
                        "One integrated ecosystem: the Ark as the cornerstone, the Messenger \
                         as its reach. Redrawing where people can live and explore.",
                    )
                    .size(12.0)
                    .color(theme::DIM),
                );
                ui.add_space(8.0);
                let pulse = theme::GREEN.gamma_multiply(0.5 + 0.5 * (t * 3.0).sin().abs());
                ui.label(RichText::new("⬤ SYSTEM NORMAL").monospace().size(11.0).color(pulse));
            }
            footer_column(
                &mut cols[1],
                "CORE BASE",
                &["Overview", "Self-sustaining energy", "Book a visit"],
            );
            footer_column(
                &mut cols[2],
                "AIRCRAFT",
                &["Messenger overview", "Co-op flight demo", "Apply for a test flight"],
            );
            footer_column(
                &mut cols[3],
                "PROTOCOL",
                &["About the Origin Plan", "Careers", "Privacy"],
            );
        });
        ui.add_space(28.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("© 2030 FARFLY FUTURE INC. ALL RIGHTS RESERVED.")
                    .size(10.0)
                    .color(theme::DIM),
            );
        });
        ui.add_space(24.0);
    });
}

fn footer_column(ui: &mut egui::Ui, title: &str, entries: &[&str]) {
    ui.label(RichText::new(title).size(13.0).strong().color(theme::WHITE));
    ui.add_space(8.0);
    for e in entries {
        ui.label(RichText::new(*e).size(12.0).color(theme::MUTED));
    }
}
