use crate::shared::export::ExcelExportable;
use contracts::projections::p900_rota::{RotaRow, ROTA_HEADERS};

impl ExcelExportable for RotaRow {
    fn headers() -> Vec<&'static str> {
        ROTA_HEADERS.to_vec()
    }

    fn to_csv_row(&self) -> Vec<String> {
        self.cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;

    fn sample() -> RotaRow {
        RotaRow {
            serial_no: 1,
            use_case: "verification".to_string(),
            task_description: "check; then sign".to_string(),
            actor: "alice".to_string(),
            scheduled_at: "2024-03-15T14:02".to_string(),
            p0_url: String::new(),
            r0_url: String::new(),
            status: String::new(),
            remarks: String::new(),
        }
    }

    #[test]
    fn test_rota_csv() {
        let csv = build_csv(&[sample()]);
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(
            lines[0],
            "S.No;Use Case;Task Description;Actor;When;P0 URL;R0 URL;Status;Remarks"
        );
        assert_eq!(
            lines[1],
            "1;verification;\"check; then sign\";alice;2024-03-15T14:02;;;;"
        );
    }
}
