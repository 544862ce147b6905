use crate::models::{Record, RecordValue};
use crate::review::ReviewWorkflow;

const SELECTED_MARK: &str = "[x]";
const UNSELECTED_MARK: &str = "[ ]";

/// Render the review state as a plain-text table
pub fn render(workflow: &ReviewWorkflow) -> String {
    let mut output = String::new();
    output.push_str(&format!("Extracted {} Details\n", workflow.variant()));

    match workflow.document() {
        None => {
            output.push_str("No document uploaded yet.\n");
            return output;
        }
        Some(file) if !workflow.is_processed() => {
            output.push_str(&format!("📄 {} (processing...)\n", file.name));
            return output;
        }
        Some(file) => {
            output.push_str(&format!("📄 {} ✔ Successfully processed\n", file.name));
        }
    }

    let shape = workflow.shape();
    let mut header = vec![shape.key_label.to_string()];
    match shape.columns {
        [(_, label)] => {
            header.push(label.to_string());
            header.push("Input".to_string());
        }
        columns => header.extend(columns.iter().map(|(_, label)| label.to_string())),
    }

    let rows: Vec<Vec<String>> = workflow
        .visible_records()
        .iter()
        .map(|record| row(workflow, record))
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let all_mark = if workflow.all_selected() { SELECTED_MARK } else { UNSELECTED_MARK };
    output.push_str(&format_line(all_mark, &header, &widths));
    for (record, cells) in workflow.visible_records().iter().zip(&rows) {
        let mark = if workflow.is_selected(&record.key) { SELECTED_MARK } else { UNSELECTED_MARK };
        output.push_str(&format_line(mark, cells, &widths));
    }

    output.push_str(&format!(
        "\n{} of {} rows selected{}\n",
        workflow.selection().len(),
        workflow.records().len(),
        if workflow.can_submit() { "" } else { " (submit disabled)" }
    ));

    output
}

fn row(workflow: &ReviewWorkflow, record: &Record) -> Vec<String> {
    let mut cells = vec![record.key.clone()];
    match &record.value {
        RecordValue::Fields(fields) => {
            for field in fields {
                let name = Some(field.name.as_str());
                cells.push(workflow.overlay().resolve(record, name).unwrap_or_default());
            }
        }
        RecordValue::Single(_) | RecordValue::List(_) => {
            cells.push(record.display_value());
            cells.push(workflow.overlay().resolve(record, None).unwrap_or_default());
        }
    }
    cells
}

fn format_line(mark: &str, cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    format!("{} {}\n", mark, padded.join(" | ").trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::constants::PDF_MIME;
    use crate::models::{UploadedFile, WorkflowVariant};
    use crate::records::FixtureSource;
    use crate::submission::MemorySink;
    use std::sync::Arc;

    async fn workflow(variant: WorkflowVariant) -> ReviewWorkflow {
        ReviewWorkflow::from_config(
            variant,
            &Config::default(),
            &FixtureSource::new(),
            Arc::new(MemorySink::new()),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_render_without_document() {
        let review = workflow(WorkflowVariant::Invoice).await;
        let table = render(&review);
        assert!(table.contains("Extracted Invoice Details"));
        assert!(table.contains("No document uploaded yet."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_contract_table() {
        let mut review = workflow(WorkflowVariant::HotelContract).await;
        review
            .accept_file(UploadedFile::new("contract.pdf", PDF_MIME, b"%PDF".to_vec()))
            .unwrap();
        assert!(render(&review).contains("processing"));

        review.wait_processed().await.unwrap();
        review.toggle("Hotel Name").unwrap();
        review.set_override("Room Rates", None, "$209/night").unwrap();

        let table = render(&review);
        assert!(table.contains("Successfully processed"));
        assert!(table.contains("Key"));
        assert!(table.contains("Input"));
        assert!(table.contains("[x] Hotel Name"));
        assert!(table.contains("[ ] Room Rates"));
        assert!(table.contains("$209/night"));
        assert!(table.contains("1 of 8 rows selected"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_rate_loading_columns() {
        let mut review = workflow(WorkflowVariant::RateLoading).await;
        review
            .accept_file(UploadedFile::new("rli.pdf", PDF_MIME, b"%PDF".to_vec()))
            .unwrap();
        review.wait_processed().await.unwrap();

        let table = render(&review);
        assert!(table.contains("GDS"));
        assert!(table.contains("Pseudo City Code"));
        assert!(table.contains("Apollo/Galileo"));
        assert!(table.contains("submit disabled"));
    }
}
