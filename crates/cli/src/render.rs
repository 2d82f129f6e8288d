// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of the two screens.

use registro::{FieldView, FormEngine, SubmitControl};
use registro_domain::{FieldError, StoredRecord};
use registro_notice::{Notice, Notifier};
use registro_registry::{DeletionPrompt, RecordsView};

/// Renders the form screen.
pub fn render_form<N: Notifier>(engine: &FormEngine<N>) -> String {
    let mut out: String = String::from("== Registro ==\n");
    for view in engine.field_views() {
        out.push_str(&render_field(&view));
        out.push('\n');
    }
    out.push_str(engine.status().message());
    out.push('\n');
    let control: SubmitControl = engine.submit_control();
    let state: &str = if control.enabled { "" } else { " (disabled)" };
    out.push_str(&format!("[{}]{state}", control.label));
    out
}

fn render_field(view: &FieldView) -> String {
    let marker: &str = if view.valid_and_non_empty { "ok" } else { "  " };
    let required: &str = if view.field.is_validated() { "*" } else { " " };
    let mut line: String = format!(
        "{marker} {:<12}{required} {}",
        view.field.label(),
        view.value
    );
    if let Some(error) = &view.error {
        line.push_str(&format!("  <- {error}"));
    }
    line
}

/// Renders the records screen.
pub fn render_records(view: &RecordsView) -> String {
    if let Some((title, hint)) = view.empty_state() {
        return format!("== Registros (0) ==\n{title}\n{hint}");
    }
    let mut out: String = format!("== Registros ({}) ==", view.total);
    for record in &view.records {
        out.push('\n');
        out.push_str(&render_record(record));
    }
    out
}

fn render_record(record: &StoredRecord) -> String {
    let mut line: String = format!(
        "#{} {} (DNI {}) {} x {} @ {} on {}",
        record.id,
        record.nombres,
        record.dni,
        record.cantidad,
        record.tipo,
        record.lugar,
        record.fecha_display()
    );
    if !record.descripcion.is_empty() {
        line.push_str(&format!("\n    {}", record.descripcion));
    }
    line
}

/// Renders a delete confirmation.
pub fn render_prompt(prompt: &DeletionPrompt) -> String {
    format!("{}\n{} (yes/no)", prompt.title, prompt.message)
}

/// Renders one notice.
pub fn render_notice(notice: &Notice) -> String {
    notice.to_string()
}

/// Renders the errors of a rejected submission, one per line.
pub fn render_errors<'a>(errors: impl Iterator<Item = &'a FieldError>) -> String {
    errors
        .map(|error| format!("  {error}"))
        .collect::<Vec<String>>()
        .join("\n")
}
