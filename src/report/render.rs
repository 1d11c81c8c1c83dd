//! Markdown rendering of assembled reports.

use crate::report::{ReportData, SportsReport, Template, WeatherReport};
use anyhow::bail;
use std::fmt::{self, Write};

pub trait Renderer {
    fn render(&self, template: Template, data: &ReportData) -> anyhow::Result<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, template: Template, data: &ReportData) -> anyhow::Result<String> {
        match (template, data) {
            (Template::Sports, ReportData::Sports(report)) => Ok(render_sports(report)?),
            (Template::Weather, ReportData::Weather(report)) => Ok(render_weather(report)?),
            (template, data) => bail!(
                "template {template:?} cannot render {:?} data",
                data.template()
            ),
        }
    }
}

fn render_sports(report: &SportsReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "# {}\n", report.title)?;
    writeln!(out, "_{}_\n", report.date.format("%A, %B %-d, %Y"))?;

    if report.leagues.iter().all(|l| l.teams.is_empty()) {
        out.push_str("No team updates today.\n");
        return Ok(out);
    }

    for section in report.leagues.iter().filter(|l| !l.teams.is_empty()) {
        writeln!(out, "## {}\n", section.league.label())?;
        for team in &section.teams {
            writeln!(out, "### {} ({})\n", team.name, team.record)?;
            writeln!(out, "- **Last:** {}", team.last)?;
            writeln!(out, "- **Next:** {}\n", team.next)?;
        }
    }
    Ok(out)
}

fn render_weather(report: &WeatherReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "# {}\n", report.title)?;
    writeln!(out, "_{}_\n", report.date.format("%A, %B %-d, %Y"))?;

    if let Some(sun) = &report.risenset {
        out.push_str("## Sun\n\n");
        out.push_str("| First light | Dawn | Sunrise | Solar noon | Golden hour | Sunset | Dusk | Last light | Day length |\n");
        out.push_str("|---|---|---|---|---|---|---|---|---|\n");
        writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
            sun.first_light,
            sun.dawn,
            sun.sunrise,
            sun.solar_noon,
            sun.golden_hour,
            sun.sunset,
            sun.dusk,
            sun.last_light,
            sun.day_length
        )?;
    }

    if report.weather.is_empty() {
        out.push_str("Forecast unavailable.\n");
        return Ok(out);
    }

    for day in &report.weather {
        let s = &day.summary;
        writeln!(out, "## {}\n", title_case(&day.label))?;
        writeln!(
            out,
            "High **{}°** / Low **{}°** · {}% chance of rain\n",
            s.high, s.low, s.chance_of_rain
        )?;
        if !s.detailed_forecast.day.is_empty() {
            writeln!(out, "- **Day:** {}", s.detailed_forecast.day)?;
        }
        if !s.detailed_forecast.night.is_empty() {
            writeln!(out, "- **Night:** {}", s.detailed_forecast.night)?;
        }
        out.push('\n');
    }
    Ok(out)
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
