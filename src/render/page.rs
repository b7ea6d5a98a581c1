//! HTML page builder for the mission list.
//!
//! The stylesheet and page shell are inline; each ship contributes one
//! `<section>` in config order.

use std::fmt::Write;

use super::{egg_icon_path, format_duration_whole, icon_url, numfmt_whole, ship_icon_path, RenderError};
use crate::catalog::mission_fuels;
use crate::config::AssetsConfig;
use crate::derive::ShipRecord;
use crate::types::{seconds_to_duration, Ship};

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Mission List</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
            max-width: 960px;
            margin: 0 auto;
            padding: 20px;
            background: #f5f5f5;
            color: #222;
        }
        nav {
            display: flex;
            flex-wrap: wrap;
            gap: 8px;
            margin-bottom: 20px;
        }
        nav img {
            width: 40px;
            height: 40px;
        }
        .ship {
            background: white;
            margin: 20px 0;
            padding: 20px;
            border-radius: 6px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        .ship header {
            display: flex;
            align-items: center;
            gap: 12px;
        }
        .ship h2 {
            margin: 0;
        }
        .sensors {
            color: #666;
            font-size: 14px;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin: 12px 0;
        }
        th, td {
            text-align: left;
            padding: 6px 8px;
            border-bottom: 1px solid #eee;
        }
        tr.tutorial td:first-child { color: #888; }
        tr.short td:first-child { color: #2563eb; }
        tr.long td:first-child { color: #7c3aed; }
        tr.epic td:first-child { color: #d97706; }
        .fuel {
            display: inline-flex;
            align-items: center;
            margin-right: 10px;
            white-space: nowrap;
        }
        .fuel img {
            width: 20px;
            height: 20px;
            margin-right: 2px;
        }
        .advance dt {
            font-weight: bold;
            margin-top: 6px;
        }
        .advance dd {
            margin-left: 0;
        }
        footer {
            margin-top: 30px;
            text-align: center;
            color: #666;
            font-size: 12px;
        }
    </style>
</head>
<body>
    <h1>Mission List</h1>
"#;

const PAGE_FOOT: &str = r#"    <footer>
        <p>Pro times assume three concurrent missions. Chicken One time is an approximation of the opening missions.</p>
    </footer>
</body>
</html>
"#;

/// Render the full mission list page.
pub fn render_index(ships: &[ShipRecord], assets: &AssetsConfig) -> Result<String, RenderError> {
    let mut html = String::with_capacity(32 * 1024);
    html.push_str(PAGE_HEAD);
    write_nav(&mut html, ships, assets)?;
    for record in ships {
        write_ship(&mut html, record, assets)?;
    }
    html.push_str(PAGE_FOOT);
    Ok(html)
}

/// Anchor id for a ship's section, e.g. `cornish-hen-corvette`.
fn anchor(ship: Ship) -> String {
    ship.name().to_lowercase().replace(' ', "-")
}

/// Escape text for use inside HTML content or a double-quoted attribute.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_nav(out: &mut String, ships: &[ShipRecord], assets: &AssetsConfig) -> std::fmt::Result {
    writeln!(out, "    <nav>")?;
    for record in ships {
        let ship = record.ship();
        writeln!(
            out,
            r##"        <a href="#{}" title="{}"><img src="{}" alt="{}"></a>"##,
            anchor(ship),
            escape(ship.name()),
            escape(&icon_url(&assets.base_url, &ship_icon_path(ship), assets.ship_icon_size)),
            escape(ship.name()),
        )?;
    }
    writeln!(out, "    </nav>")
}

fn write_ship(out: &mut String, record: &ShipRecord, assets: &AssetsConfig) -> std::fmt::Result {
    let ship = record.ship();
    let size = assets.ship_icon_size;

    writeln!(out, r#"    <section class="ship" id="{}">"#, anchor(ship))?;
    writeln!(out, "        <header>")?;
    writeln!(
        out,
        r#"            <img src="{}" alt="{}" width="{size}" height="{size}">"#,
        escape(&icon_url(&assets.base_url, &ship_icon_path(ship), size)),
        escape(ship.name()),
    )?;
    writeln!(out, "            <h2>{}</h2>", escape(ship.name()))?;
    if !record.sensors.is_empty() {
        writeln!(
            out,
            r#"            <span class="sensors">Sensors: {}</span>"#,
            escape(record.sensors)
        )?;
    }
    writeln!(out, "        </header>")?;

    writeln!(out, r#"        <table class="missions">"#)?;
    writeln!(
        out,
        "            <thead><tr><th>Mission</th><th>Duration</th><th>Fuel</th></tr></thead>"
    )?;
    writeln!(out, "            <tbody>")?;
    for d in &record.params.durations {
        write!(
            out,
            r#"                <tr class="{}"><td>{}</td><td>{}</td><td>"#,
            d.duration_type.css_class(),
            escape(d.duration_type.name()),
            format_duration_whole(seconds_to_duration(d.seconds)),
        )?;
        for fuel in mission_fuels(ship, d.duration_type) {
            write!(
                out,
                r#"<span class="fuel"><img src="{}" alt="{}" title="{}">{}</span>"#,
                escape(&icon_url(&assets.base_url, &egg_icon_path(fuel.egg), assets.egg_icon_size)),
                escape(fuel.egg.name()),
                escape(fuel.egg.name()),
                numfmt_whole(fuel.amount),
            )?;
        }
        writeln!(out, "</td></tr>")?;
    }
    writeln!(out, "            </tbody>")?;
    writeln!(out, "        </table>")?;

    // Henerprise has nothing to advance to.
    if record.launches_to_advance > 0 {
        writeln!(out, r#"        <dl class="advance">"#)?;
        writeln!(out, "            <dt>Launches to advance</dt>")?;
        writeln!(out, "            <dd>{}</dd>", record.launches_to_advance)?;
        writeln!(out, "            <dt>Time to advance</dt>")?;
        writeln!(
            out,
            "            <dd>{} (standard), {} (pro)</dd>",
            format_duration_whole(record.time_to_advance_std),
            format_duration_whole(record.time_to_advance_pro),
        )?;
        writeln!(out, "            <dt>Cumulative time to advance</dt>")?;
        writeln!(
            out,
            "            <dd>{} (standard), {} (pro)</dd>",
            format_duration_whole(record.cumulative_time_to_advance_std),
            format_duration_whole(record.cumulative_time_to_advance_pro),
        )?;
        writeln!(out, "        </dl>")?;
    }

    writeln!(out, "    </section>")
}
