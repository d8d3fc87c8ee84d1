//! FWI Risk Console - Main Entry Point
//!
//! Interactive console surface standing in for the reference web page: it
//! owns the raw form state, implements the presentation sink, and drives
//! the prediction controller and the chat session manager. Everything runs
//! on one current-thread runtime; async work suspends only at the network
//! boundary.

mod api;
mod logic;
pub mod constants;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use api::sink::PresentationSink;
use api::view::{Notice, NoticeKind, ResultView, StatusView};
use logic::chat::{ChatManager, ChatTurn, SendOutcome};
use logic::health;
use logic::measurements::{self, Field, MeasurementForm};
use logic::prediction::{PredictOutcome, PredictionController, ScoreSource};
use logic::risk_guidance;
use logic::service::{HttpFwiService, ServiceConfig};
use logic::validate::{self, FieldValidity};

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Starting {} v{}...",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    runtime.block_on(run());
}

async fn run() {
    let config = ServiceConfig::default();
    log::info!("Service endpoint: {}", config.base_url);

    let service = Arc::new(HttpFwiService::new(config));
    let sink: Arc<dyn PresentationSink> = Arc::new(ConsoleSink);
    let threshold = constants::get_risk_threshold();

    let mut console = Console {
        form: MeasurementForm::new(),
        controller: PredictionController::new(service.clone(), sink.clone(), threshold),
        chat: ChatManager::new(service.clone(), sink.clone(), threshold),
        service,
        sink,
    };

    console.startup().await;

    let stdin = io::stdin();
    loop {
        print!("fwi> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        if !console.dispatch(line.trim()).await {
            break;
        }
    }

    log::info!("Shutting down");
}

/// The console surface: form state plus the two session cores.
struct Console {
    form: MeasurementForm,
    controller: PredictionController,
    chat: ChatManager,
    service: Arc<HttpFwiService>,
    sink: Arc<dyn PresentationSink>,
}

impl Console {
    /// Startup: readiness poll, offline note, first sample preload.
    async fn startup(&mut self) {
        let snapshot = health::poll(self.service.as_ref()).await;
        self.sink.status_changed(&StatusView::from_health(&snapshot));
        if !snapshot.assistant_configured {
            self.chat
                .append_note("Note: I'm currently in offline mode. Some responses may be limited.");
        }

        self.load_sample(0);
        println!("Type 'help' for commands.");
    }

    /// Handle one command line; false ends the loop.
    async fn dispatch(&mut self, line: &str) -> bool {
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => print_help(),
            "quit" | "exit" => return false,
            "show" => self.show_form(),
            "set" => self.set_field(rest),
            "sample" => match rest.parse::<usize>() {
                Ok(n) if (1..=measurements::SAMPLES.len()).contains(&n) => {
                    self.load_sample(n - 1)
                }
                _ => self.sink.notify(&Notice::error(format!(
                    "Usage: sample <1-{}>",
                    measurements::SAMPLES.len()
                ))),
            },
            "predict" => self.predict().await,
            "reset" => {
                self.form.clear();
                self.controller.reset_results();
                self.sink.notify(&Notice::info("Form cleared"));
            }
            "chat" => {
                if self.chat.send(rest).await == SendOutcome::Ignored {
                    self.sink.notify(&Notice::error("Usage: chat <message>"));
                }
            }
            "prompts" => self.show_prompts(),
            "ask" => self.ask_prompt(rest).await,
            "reset-chat" => {
                self.chat.reset();
                self.sink.notify(&Notice::info("Chat history cleared"));
            }
            "transcript" => self.show_transcript(),
            "health" => {
                let snapshot = health::poll(self.service.as_ref()).await;
                self.sink.status_changed(&StatusView::from_health(&snapshot));
                self.sink
                    .assistant_status(snapshot.assistant_configured && self.chat.is_assistant_online());
            }
            _ => self
                .sink
                .notify(&Notice::error(format!("Unknown command: {}", command))),
        }
        true
    }

    /// One prediction cycle, plus the page's follow-up assistant behavior.
    async fn predict(&mut self) {
        match self.controller.predict(&self.form).await {
            PredictOutcome::Completed(result) if result.source == ScoreSource::Remote => {
                let question = format!(
                    "The FWI prediction is {:.2} which is {}. What does this mean?",
                    result.score, result.risk_level
                );
                self.chat.send(&question).await;
            }
            PredictOutcome::Completed(result) => {
                self.chat.append_note(&format!(
                    "I'm showing a local estimate since I couldn't reach the server. \
                     The approximate FWI score is {:.2}",
                    result.score
                ));
            }
            PredictOutcome::Rejected(_) | PredictOutcome::Dropped | PredictOutcome::Superseded => {}
        }
    }

    fn load_sample(&mut self, index: usize) {
        let Some(sample) = measurements::sample(index) else {
            return;
        };
        self.form.load(sample);
        self.controller.reset_results();
        self.sink
            .notify(&Notice::info(format!("Loaded Sample {}", index + 1)));
        self.chat.append_note(&format!(
            "Loaded sample data: Temperature {}°C, RH {}%, Wind {}km/h",
            sample.temperature, sample.rh, sample.ws
        ));
    }

    fn set_field(&mut self, rest: &str) {
        let Some((key, value)) = rest.split_once(' ') else {
            self.sink
                .notify(&Notice::error("Usage: set <field> <value>"));
            return;
        };
        match Field::from_key(key.trim()) {
            Some(field) => {
                self.form.set(field, value.trim());
                self.sink
                    .notify(&Notice::info(format!("{} = {}", field.key(), value.trim())));
            }
            None => self.sink.notify(&Notice::error(format!(
                "Unknown field '{}' (fields: {})",
                key,
                Field::ALL.map(|f| f.key()).join(", ")
            ))),
        }
    }

    fn show_form(&self) {
        let validity = validate::validate_all(&self.form);
        for field in Field::ALL {
            let value = self.form.get(field);
            let marker = if value.is_empty() || validity.is_valid(field) {
                ""
            } else {
                "  (invalid)"
            };
            println!(
                "  {:<24} {}{}",
                field.label(),
                if value.is_empty() { "-" } else { value },
                marker
            );
        }
    }

    fn show_transcript(&self) {
        for turn in self.chat.transcript() {
            let who = if turn.is_from_user { "You" } else { "FWI Assistant" };
            println!("  {} [{}]: {}", who, turn.timestamp.format("%H:%M"), turn.text);
        }
    }

    fn show_prompts(&self) {
        for (i, prompt) in self.current_prompts().iter().enumerate() {
            println!("  {}. {}", i + 1, prompt);
        }
        println!("  (send one with 'ask <n>')");
    }

    async fn ask_prompt(&mut self, rest: &str) {
        let prompts = self.current_prompts();
        match rest.parse::<usize>() {
            Ok(n) if (1..=prompts.len()).contains(&n) => {
                self.chat.send(prompts[n - 1]).await;
            }
            _ => self
                .sink
                .notify(&Notice::error(format!("Usage: ask <1-{}>", prompts.len()))),
        }
    }

    /// Suggested prompts follow the current result's risk level
    fn current_prompts(&self) -> &'static [&'static str] {
        let level = self
            .controller
            .current_result()
            .map(|r| r.risk_level)
            .unwrap_or(logic::classify::RiskLevel::Safe);
        risk_guidance::for_level(level).suggested_prompts
    }
}

fn print_help() {
    println!("Commands:");
    println!("  show                 print the form fields");
    println!("  set <field> <value>  edit one field (temperature, rh, ws, rain, ffmc, dmc, dc, isi, bui)");
    println!("  sample <1-5>         load a sample preset");
    println!("  predict              run a prediction cycle");
    println!("  reset                clear form and result");
    println!("  chat <message>       ask the FWI assistant");
    println!("  prompts / ask <n>    suggested assistant prompts");
    println!("  transcript           print the conversation so far");
    println!("  reset-chat           clear the conversation");
    println!("  health               refresh the service status");
    println!("  quit                 exit");
}

// ============================================================================
// CONSOLE SINK
// ============================================================================

/// Renders core output as plain console lines.
struct ConsoleSink;

impl PresentationSink for ConsoleSink {
    fn prediction_busy(&self, busy: bool) {
        if busy {
            println!("  [..] processing prediction...");
        }
    }

    fn show_field_validity(&self, validity: &FieldValidity) {
        for field in validity.failed_fields() {
            println!("  [!!] {} needs a numeric value", field.label());
        }
    }

    fn show_result(&self, view: &ResultView) {
        let marker = if view.degraded { "  (local estimate)" } else { "" };
        println!();
        println!(
            "  FWI score: {}   [{}]{}",
            view.display_score,
            view.risk_level.as_str(),
            marker
        );
        println!("  {}", view.description);
        for rec in &view.recommendations {
            println!("    - {}", rec);
        }
        println!();
    }

    fn clear_result(&self) {
        log::debug!("Result display cleared");
    }

    fn chat_busy(&self, busy: bool) {
        if busy {
            println!("  assistant is typing...");
        }
    }

    fn transcript_changed(&self, turns: &[ChatTurn]) {
        // Only the newest turn needs printing; the console scrolls.
        if let Some(turn) = turns.last() {
            let who = if turn.is_from_user { "You" } else { "FWI Assistant" };
            println!("  {} [{}]: {}", who, turn.timestamp.format("%H:%M"), turn.text);
        }
    }

    fn assistant_status(&self, online: bool) {
        log::debug!(
            "Assistant status: {}",
            if online { "online" } else { "offline" }
        );
    }

    fn status_changed(&self, status: &StatusView) {
        println!("  System status: {} - {}", status.overall, status.message);
    }

    fn notify(&self, notice: &Notice) {
        let tag = match notice.kind {
            NoticeKind::Info => "--",
            NoticeKind::Success => "OK",
            NoticeKind::Warning => "!~",
            NoticeKind::Error => "!!",
        };
        println!("  [{}] {}", tag, notice.text);
    }
}
