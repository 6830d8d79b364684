//! Interactive dashboard session driven by line-based events.
//!
//! Each input line is one event:
//!
//! ```text
//! city Ankara
//! metrics min_temp_c,avg_temp_c
//! metrics
//! show
//! quit
//! ```
//!
//! `metrics` with no list clears the selection. After every `city`,
//! `metrics` or `show` event the full dashboard is recomputed and written
//! out. Events are handled strictly one at a time.

use crate::config::OutputFormat;
use crate::render::render_output;
use anyhow::bail;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use wfd_dashboard::DashboardController;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    CityChanged(String),
    MetricsChanged(Vec<String>),
    Show,
    Quit,
}

impl FromStr for SessionEvent {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        match command.to_ascii_lowercase().as_str() {
            "city" => {
                if rest.is_empty() {
                    bail!("'city' needs a city name");
                }
                Ok(SessionEvent::CityChanged(rest.to_string()))
            }
            "metrics" => Ok(SessionEvent::MetricsChanged(parse_metric_list(rest))),
            "show" => Ok(SessionEvent::Show),
            "quit" | "exit" => Ok(SessionEvent::Quit),
            other => bail!("unknown event '{}'", other),
        }
    }
}

/// Split a comma-separated metric list, dropping empty entries.
pub fn parse_metric_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read events from `input` until end of input or `quit`, writing the
/// recomputed dashboard to `output` after each one.
///
/// Invalid lines are reported on `output` and the session carries on.
pub async fn run_session<R, W>(
    controller: &mut DashboardController,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut handled = 0usize;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let event = match line.parse::<SessionEvent>() {
            Ok(event) => event,
            Err(e) => {
                log::warn!("session: {}", e);
                output.write_all(format!("error: {}\n", e).as_bytes()).await?;
                output.flush().await?;
                continue;
            }
        };
        log::debug!("session: {:?}", event);

        let dashboard = match event {
            SessionEvent::CityChanged(city) => controller.on_city_changed(city),
            SessionEvent::MetricsChanged(metrics) => controller.on_metrics_changed(metrics),
            SessionEvent::Show => controller.recompute(),
            SessionEvent::Quit => break,
        };
        handled += 1;

        let rendered = render_output(&dashboard, format)?;
        output.write_all(rendered.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }

    log::info!("session: handled {} events", handled);
    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tokio::io::BufWriter;
    use wfd_core::ForecastRow;
    use wfd_data::DatasetStore;

    fn controller() -> DashboardController {
        let row = |city: &str, day: u32| ForecastRow {
            city: city.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            min_temp_c: 5.0,
            max_temp_c: 15.0,
            avg_temp_c: 10.0,
            max_wind_kph: 12.0,
            uv: 6.0,
            avg_humidity: 60.0,
            total_precip_mm: 1.0,
        };
        DashboardController::new(DatasetStore::new(vec![
            row("Istanbul", 1),
            row("Istanbul", 2),
            row("Istanbul", 3),
            row("Ankara", 1),
            row("Ankara", 2),
        ]))
    }

    #[test]
    fn parse_events() {
        assert_eq!(
            "city Ankara".parse::<SessionEvent>().unwrap(),
            SessionEvent::CityChanged("Ankara".to_string())
        );
        assert_eq!(
            "  city   New York ".parse::<SessionEvent>().unwrap(),
            SessionEvent::CityChanged("New York".to_string())
        );
        assert_eq!(
            "metrics min_temp_c, avg_temp_c".parse::<SessionEvent>().unwrap(),
            SessionEvent::MetricsChanged(vec!["min_temp_c".to_string(), "avg_temp_c".to_string()])
        );
        assert_eq!(
            "metrics".parse::<SessionEvent>().unwrap(),
            SessionEvent::MetricsChanged(Vec::new())
        );
        assert_eq!("SHOW".parse::<SessionEvent>().unwrap(), SessionEvent::Show);
        assert_eq!("exit".parse::<SessionEvent>().unwrap(), SessionEvent::Quit);
    }

    #[test]
    fn parse_rejects_bad_events() {
        assert!("city".parse::<SessionEvent>().is_err());
        assert!("zoom 3".parse::<SessionEvent>().is_err());
    }

    #[tokio::test]
    async fn session_applies_events_in_order() {
        let mut controller = controller();
        let input: &[u8] = b"city Ankara\nmetrics max_temp_c\nshow\n";
        let mut output = Vec::new();

        let handled = run_session(&mut controller, input, &mut output, OutputFormat::Text)
            .await
            .unwrap();
        assert_eq!(handled, 3);
        assert_eq!(controller.state().selected_city, "Ankara");
        assert_eq!(controller.state().selected_metrics.len(), 1);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("== Summary ==").count(), 3, "One dashboard per event");
        assert!(text.contains("Temperature Over Time in Ankara"));
    }

    #[tokio::test]
    async fn session_stops_at_quit_and_survives_bad_lines() {
        let mut controller = controller();
        let input: &[u8] = b"\nfly away\ncity Ankara\nquit\ncity Istanbul\n";
        let mut output = Vec::new();

        let handled = run_session(&mut controller, input, &mut output, OutputFormat::Json)
            .await
            .unwrap();
        assert_eq!(handled, 1);
        assert_eq!(controller.state().selected_city, "Ankara", "Events after quit are ignored");

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("error: unknown event 'fly'"));
    }

    #[tokio::test]
    async fn errors_reach_a_buffered_writer_immediately() {
        let mut controller = controller();
        let input: &[u8] = b"zoom 3\n";
        let mut writer = BufWriter::new(Vec::new());

        let handled = run_session(&mut controller, input, &mut writer, OutputFormat::Text)
            .await
            .unwrap();
        assert_eq!(handled, 0);
        let written = String::from_utf8(writer.get_ref().clone()).unwrap();
        assert_eq!(written, "error: unknown event 'zoom'\n");
    }
}
