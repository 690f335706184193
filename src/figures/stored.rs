//! Precomputed figures shipped as serialized JSON inside `plot_json.csv`.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The fixed set of precomputed plots, keyed by the `Plot` column tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum StoredPlotKind {
    Correlation,
    EfficientFrontier,
    Diversification,
}

impl StoredPlotKind {
    /// Tag as written in the `Plot` column of `plot_json.csv`.
    pub fn tag(self) -> &'static str {
        match self {
            StoredPlotKind::Correlation => "Correlation",
            StoredPlotKind::EfficientFrontier => "EF",
            StoredPlotKind::Diversification => "DiverseBar",
        }
    }
}

/// One raw row of `plot_json.csv`.
#[derive(Debug, Clone)]
pub struct StoredPlotRow {
    pub name: String,
    pub json: String,
}

/// Select the row for a plot tag. Zero rows means the bucket content is
/// incomplete; more than one means it is ambiguous. Both are errors.
pub fn lookup_plot_row(rows: &[StoredPlotRow], kind: StoredPlotKind) -> Result<&StoredPlotRow> {
    let mut matches = rows.iter().filter(|row| row.name == kind.tag());
    let Some(first) = matches.next() else {
        bail!("no stored plot row tagged '{}'", kind.tag());
    };
    if matches.next().is_some() {
        bail!("multiple stored plot rows tagged '{}'", kind.tag());
    }
    Ok(first)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceMode {
    Lines,
    Markers,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterTrace {
    pub name: String,
    pub mode: TraceMode,
    pub points: Vec<[f64; 2]>,
}

/// Typed chart specification a `JSON` payload deserializes into.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoredFigure {
    /// Square matrix, `values[row][col]`, labels shared by both axes.
    Heatmap {
        title: String,
        labels: Vec<String>,
        values: Vec<Vec<f64>>,
    },
    Scatter {
        title: String,
        x_label: String,
        y_label: String,
        traces: Vec<ScatterTrace>,
    },
    Bar {
        title: String,
        labels: Vec<String>,
        values: Vec<f64>,
    },
}

impl StoredFigure {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn title(&self) -> &str {
        match self {
            StoredFigure::Heatmap { title, .. }
            | StoredFigure::Scatter { title, .. }
            | StoredFigure::Bar { title, .. } => title,
        }
    }
}

/// The three deserialized precomputed figures, resolved once at startup.
#[derive(Debug, Clone)]
pub struct StoredPlots {
    pub correlation: StoredFigure,
    pub frontier: StoredFigure,
    pub diversification: StoredFigure,
}

impl StoredPlots {
    pub fn from_rows(rows: &[StoredPlotRow]) -> Result<Self> {
        let parse = |kind| -> Result<StoredFigure> {
            let row = lookup_plot_row(rows, kind)?;
            StoredFigure::from_json(&row.json)
        };
        Ok(Self {
            correlation: parse(StoredPlotKind::Correlation)?,
            frontier: parse(StoredPlotKind::EfficientFrontier)?,
            diversification: parse(StoredPlotKind::Diversification)?,
        })
    }

    pub fn get(&self, kind: StoredPlotKind) -> &StoredFigure {
        match kind {
            StoredPlotKind::Correlation => &self.correlation,
            StoredPlotKind::EfficientFrontier => &self.frontier,
            StoredPlotKind::Diversification => &self.diversification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn row(name: &str, json: &str) -> StoredPlotRow {
        StoredPlotRow {
            name: name.to_string(),
            json: json.to_string(),
        }
    }

    const BAR_JSON: &str =
        r#"{"type":"bar","title":"Diversification","labels":["VAS","ETHI"],"values":[0.6,0.4]}"#;

    #[test]
    fn lookup_returns_exactly_one_row_per_name() {
        let rows = vec![row("Correlation", "{}"), row("EF", "{}"), row("DiverseBar", "{}")];
        for kind in StoredPlotKind::iter() {
            let found = lookup_plot_row(&rows, kind).unwrap();
            assert_eq!(found.name, kind.tag());
        }
    }

    #[test]
    fn missing_and_duplicate_rows_are_errors() {
        let rows = vec![row("Correlation", "{}"), row("Correlation", "{}")];
        assert!(lookup_plot_row(&rows, StoredPlotKind::Correlation).is_err());
        assert!(lookup_plot_row(&rows, StoredPlotKind::EfficientFrontier).is_err());
    }

    #[test]
    fn deserializes_each_figure_shape() {
        let heatmap = StoredFigure::from_json(
            r#"{"type":"heatmap","title":"Holdings Correlation",
                "labels":["VAS","ETHI"],"values":[[1.0,0.4],[0.4,1.0]]}"#,
        )
        .unwrap();
        assert!(matches!(heatmap, StoredFigure::Heatmap { .. }));

        let scatter = StoredFigure::from_json(
            r#"{"type":"scatter","title":"Efficient Frontier",
                "x_label":"Volatility","y_label":"Return",
                "traces":[{"name":"EF","mode":"lines","points":[[0.1,0.05],[0.2,0.09]]}]}"#,
        )
        .unwrap();
        assert!(matches!(scatter, StoredFigure::Scatter { .. }));

        let bar = StoredFigure::from_json(BAR_JSON).unwrap();
        assert_eq!(bar.title(), "Diversification");
    }

    #[test]
    fn from_rows_requires_all_three_plots() {
        let rows = vec![
            row(
                "Correlation",
                r#"{"type":"heatmap","title":"c","labels":["A"],"values":[[1.0]]}"#,
            ),
            row(
                "EF",
                r#"{"type":"scatter","title":"ef","x_label":"x","y_label":"y","traces":[]}"#,
            ),
            row("DiverseBar", BAR_JSON),
        ];
        let plots = StoredPlots::from_rows(&rows).unwrap();
        assert_eq!(plots.get(StoredPlotKind::Diversification).title(), "Diversification");

        assert!(StoredPlots::from_rows(&rows[..2]).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(StoredFigure::from_json("not json").is_err());
        assert!(StoredFigure::from_json(r#"{"type":"pie","title":"t"}"#).is_err());
    }
}
