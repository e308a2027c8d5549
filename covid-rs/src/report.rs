//! Narrative summary printed at the end of a run.
use getset::{Getters, Setters};
use serde::{Deserialize, Serialize};

/// Fixed text block shown after the charts. Rendering does not look at the
/// data, so the text can be tested on its own.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Getters, Setters)]
#[getset(get = "pub", set = "pub")]
pub struct Summary {
    heading: String,
    intro: Vec<String>,
    bullets: Vec<String>,
    closing: String,
}

impl Summary {
    /// Render the summary as console text.
    pub fn render(&self) -> String {
        let mut data = format!("\n--- {} ---\n", self.heading);
        for ln in &self.intro {
            data.push_str(ln);
            data.push('\n');
        }
        for ln in &self.bullets {
            data.push_str("- ");
            data.push_str(ln);
            data.push('\n');
        }
        if !self.closing.is_empty() {
            data.push('\n');
            data.push_str(&self.closing);
            data.push('\n');
        }
        return data;
    }
}

impl Default for Summary {
    fn default() -> Self {
        let lines = |xs: &[&str]| -> Vec<String> { xs.iter().map(|s| s.to_string()).collect() };
        Summary {
            heading: "Insights & Reporting".into(),
            intro: lines(&[
                "Based on the visualizations and analysis, you can now write down your key insights.",
                "For example:",
            ]),
            bullets: lines(&[
                "The trend of total cases and deaths has increased over time in the selected countries.",
                "The rate of new daily cases shows peaks and troughs, indicating waves of infection.",
                "The death rate provides a perspective on the severity of the pandemic in different countries.",
                "Vaccination campaigns have led to an increase in the percentage of the population vaccinated over time (where data is available).",
                "Comparing the timelines and slopes of these graphs across countries can reveal differences in the pandemic's progression and response.",
            ]),
            closing: "Remember to write down the narrative behind each chart and highlight any anomalies or interesting patterns you observe.".into(),
        }
    }
}
