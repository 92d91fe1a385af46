mod showcase;
mod viewer;

use eframe::egui;
use sprig_builder::Element;
use sprig_builder::element_markup;
use sprig_core::SprigError;
use sprig_core::SprigResult;
use std::path::PathBuf;

const APP_TITLE: &str = "Sprig Viewer";
const EXPORT_FILE_NAME: &str = "showcase.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunMode {
    Gui,
    EmitMarkup,
    Export,
}

fn main() -> Result<(), eframe::Error> {
    match run_mode_from_args() {
        Ok(RunMode::EmitMarkup) => {
            println!("{}", showcase::showcase_markup());
            return Ok(());
        }
        Ok(RunMode::Export) => {
            match export_showcase() {
                Ok(path) => println!("wrote {}", path.display()),
                Err(error) => eprintln!("Sprig export error: {error}"),
            }
            return Ok(());
        }
        Ok(RunMode::Gui) => {}
        Err(error) => {
            eprintln!("Sprig startup error: {error}");
            return Ok(());
        }
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 440.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(|_cc| Ok(Box::new(ViewerApp::new()))),
    )
}

fn run_mode_from_args() -> Result<RunMode, String> {
    run_mode_from_flags(std::env::args().skip(1))
}

fn run_mode_from_flags(args: impl Iterator<Item = String>) -> Result<RunMode, String> {
    for arg in args {
        match arg.as_str() {
            "--emit-markup" => return Ok(RunMode::EmitMarkup),
            "--export" => return Ok(RunMode::Export),
            other => {
                return Err(format!(
                    "unsupported flag `{other}` (expected: --emit-markup|--export)"
                ));
            }
        }
    }

    Ok(RunMode::Gui)
}

fn export_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("SPRIG_EXPORT_DIR") {
        return PathBuf::from(override_dir);
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn export_showcase() -> SprigResult<PathBuf> {
    let dir = export_dir();
    std::fs::create_dir_all(&dir).map_err(|error| {
        SprigError::new(
            "viewer.export.create_dir_failed",
            format!("failed to create `{}`: {error}", dir.display()),
        )
    })?;

    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, showcase::showcase_markup()).map_err(|error| {
        SprigError::new(
            "viewer.export.write_failed",
            format!("failed to write `{}`: {error}", path.display()),
        )
    })?;

    Ok(path)
}

struct ViewerApp {
    document: Element,
    markup: String,
    show_markup: bool,
}

impl ViewerApp {
    fn new() -> Self {
        let document = showcase::showcase_document();
        let markup = element_markup(&document);
        Self {
            document,
            markup,
            show_markup: false,
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(APP_TITLE).strong());
                ui.separator();
                ui.checkbox(&mut self.show_markup, "Show markup");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if self.show_markup {
                    ui.label(egui::RichText::new(self.markup.as_str()).monospace());
                } else {
                    viewer::render_document(ui, &self.document);
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::RunMode;
    use super::run_mode_from_flags;

    fn flags(args: &[&str]) -> impl Iterator<Item = String> {
        args.iter()
            .map(|arg| (*arg).to_owned())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn defaults_to_gui_mode() {
        assert_eq!(run_mode_from_flags(flags(&[])), Ok(RunMode::Gui));
    }

    #[test]
    fn parses_emit_markup_flag() {
        assert_eq!(
            run_mode_from_flags(flags(&["--emit-markup"])),
            Ok(RunMode::EmitMarkup)
        );
    }

    #[test]
    fn parses_export_flag() {
        assert_eq!(run_mode_from_flags(flags(&["--export"])), Ok(RunMode::Export));
    }

    #[test]
    fn rejects_unknown_flags() {
        let result = run_mode_from_flags(flags(&["--what"]));
        assert!(result.is_err());
        let message = result.err().unwrap_or_default();
        assert!(message.contains("unsupported flag"));
    }
}
