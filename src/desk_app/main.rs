/**
 * Customer Desk - Main Entry Point
 *
 * Native egui window over the customer server. Store calls run on a tokio
 * runtime owned by `main`; the UI polls for their results every frame.
 */
use std::time::Instant;

use customer_desk::desk_app::theme::styles;
use customer_desk::desk_app::{views, Config, DeskState};
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 720.0])
            .with_min_inner_size([600.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Customer Management",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(DeskApp {
                state: DeskState::new(Config::new(), handle),
            }))
        }),
    )?;

    Ok(())
}

struct DeskApp {
    state: DeskState,
}

impl eframe::App for DeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.state.poll();
        self.state.mount(ctx);
        self.state.tick(now);

        views::render_top_bar(ctx, &mut self.state);
        views::render_notice_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // Wake up in time to hide the notice
        if let Some(delay) = self.state.next_repaint(now) {
            ctx.request_repaint_after(delay);
        }
    }
}
