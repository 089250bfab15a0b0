use eframe::egui;
use ramp_core::{MAX_STEPS, MIN_STEPS, OklchColor, Ramp, RampEntry, format_css};
use std::time::{Duration, Instant};

/// How long a swatch or the export button shows its "copied" state.
const COPIED_RESET: Duration = Duration::from_secs(2);

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Tints & Shades Generator",
        options,
        Box::new(|_cc| {
            Ok(Box::new(
                RampApp::new().expect("failed to build default ramp"),
            ))
        }),
    )
}

/// Identifies which copy button last wrote to the clipboard, so only
/// that one shows the checkmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyTag {
    Shade(usize),
    Base,
    Tint(usize),
    Export,
}

struct RampApp {
    // Form state
    base_input: String,
    steps: usize,

    // Latest result; replaced wholesale on each Generate.
    ramp: Ramp,

    // UI state
    selected: Option<OklchColor>,
    copied: Option<(CopyTag, Instant)>,
    show_export: bool,
    last_error: Option<String>,
}

impl RampApp {
    fn new() -> anyhow::Result<Self> {
        let ramp = Ramp::generate(ramp_core::DEFAULT_BASE_COLOR, ramp_core::DEFAULT_STEPS)?;
        Ok(Self {
            base_input: ramp_core::DEFAULT_BASE_COLOR.to_string(),
            steps: ramp_core::DEFAULT_STEPS,
            selected: Some(ramp.base.oklch),
            ramp,
            copied: None,
            show_export: false,
            last_error: None,
        })
    }

    fn generate(&mut self) {
        match Ramp::generate(self.base_input.trim(), self.steps) {
            Ok(ramp) => {
                self.selected = Some(ramp.base.oklch);
                self.ramp = ramp;
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(format!("{e}")),
        }
    }

    fn is_copied(&self, tag: CopyTag) -> bool {
        matches!(self.copied, Some((t, _)) if t == tag)
    }

    fn swatch(&mut self, ui: &mut egui::Ui, color: OklchColor, tag: CopyTag) {
        let (r, g, b) = color.to_rgb8();
        let mark = if self.is_copied(tag) { "✔" } else { "" };
        let button = egui::Button::new(egui::RichText::new(mark).size(16.0))
            .fill(egui::Color32::from_rgb(r, g, b))
            .min_size(egui::vec2(56.0, 56.0));

        let response = ui.add(button).on_hover_text(color.css_value());
        if response.hovered() || response.has_focus() {
            self.selected = Some(color);
        }
        if response.clicked() {
            ui.ctx().copy_text(color.css_value());
            self.copied = Some((tag, Instant::now()));
        }
    }

    fn swatch_group(
        &mut self,
        ui: &mut egui::Ui,
        title: &str,
        entries: &[RampEntry],
        tag_of: fn(usize) -> CopyTag,
    ) {
        ui.vertical(|ui| {
            ui.strong(title);
            ui.horizontal(|ui| {
                for (i, entry) in entries.iter().enumerate() {
                    ui.vertical(|ui| {
                        self.swatch(ui, entry.color, tag_of(i));
                        ui.label(format!("{}%", entry.lightness));
                    });
                }
            });
        });
    }

    fn export_window(&mut self, ctx: &egui::Context) {
        let css = format_css(&self.ramp);
        let copy_label = if self.is_copied(CopyTag::Export) {
            "Copied!"
        } else {
            "Copy to Clipboard"
        };

        let mut open = self.show_export;
        let mut copy_clicked = false;
        egui::Window::new("Export CSS Variables")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(&css).monospace());
                if ui.button(copy_label).clicked() {
                    ui.ctx().copy_text(css.clone());
                    copy_clicked = true;
                }
            });
        self.show_export = open;
        if copy_clicked {
            self.copied = Some((CopyTag::Export, Instant::now()));
        }
    }
}

impl eframe::App for RampApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One-shot reset of the copied indicator; a new copy restarts it.
        if let Some((_, at)) = self.copied {
            let elapsed = at.elapsed();
            if elapsed >= COPIED_RESET {
                self.copied = None;
            } else {
                ctx.request_repaint_after(COPIED_RESET - elapsed);
            }
        }

        let input_valid = OklchColor::parse(self.base_input.trim()).is_ok();

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.heading("Tints & Shades Generator");
            ui.label("Create tints and shades from a base color using the OKLCH color space.");

            ui.horizontal(|ui| {
                ui.label("Base Color:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.base_input)
                        .hint_text("Enter hex, rgb, hsl, oklch...")
                        .desired_width(180.0),
                );

                ui.label("Steps:");
                egui::ComboBox::from_id_source("steps")
                    .selected_text(self.steps.to_string())
                    .show_ui(ui, |ui| {
                        for n in MIN_STEPS..=MAX_STEPS {
                            ui.selectable_value(&mut self.steps, n, n.to_string());
                        }
                    });

                if ui
                    .add_enabled(input_valid, egui::Button::new("Generate"))
                    .clicked()
                {
                    self.generate();
                }

                if ui.button("Export CSS").clicked() {
                    self.show_export = true;
                }
            });

            if !input_valid {
                ui.colored_label(egui::Color32::RED, "Invalid color");
            }
            if let Some(err) = &self.last_error {
                ui.colored_label(egui::Color32::RED, format!("Error: {err}"));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let shades = self.ramp.shades.clone();
            let tints = self.ramp.tints.clone();
            let base = self.ramp.base.oklch;

            ui.horizontal_top(|ui| {
                self.swatch_group(ui, "Shades", &shades, CopyTag::Shade);
                ui.separator();
                ui.vertical(|ui| {
                    ui.strong("Base Color");
                    self.swatch(ui, base, CopyTag::Base);
                    ui.label(format!("{}%", (base.l * 100.0).round() as u8));
                });
                ui.separator();
                self.swatch_group(ui, "Tints", &tints, CopyTag::Tint);
            });

            ui.separator();

            if let Some(color) = self.selected {
                ui.horizontal(|ui| {
                    ui.strong("Selected Color:");
                    ui.monospace(color.css_value());
                });
            }
            ui.horizontal(|ui| {
                ui.strong("Base:");
                ui.monospace(&self.ramp.base.hex);
                ui.monospace(self.ramp.base.hsl.css_value());
            });
        });

        if self.show_export {
            self.export_window(ctx);
        }
    }
}
