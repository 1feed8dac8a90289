use std::{
    io::{Write, stdout},
    time::Instant,
};

use crate::{
    core::{
        bounds::terminal_width,
        color::{AnsiCode, NAMED, colorize},
        config::Config,
        data::{collect_samples, read_samples_from_path},
        error::SparkError,
    },
    render::render,
};

use super::parse::LineArgs;

pub fn line(a: &LineArgs) -> Result<(), SparkError> {
    let t_ingest = Instant::now();
    let data = if a.values.is_empty() {
        read_samples_from_path(&a.file)?
    } else {
        collect_samples(&a.values)?
    };
    let dur_ingest = t_ingest.elapsed().as_micros();

    let mut b = Config::builder()
        .minimum_opt(a.min.as_ref())
        .maximum_opt(a.max.as_ref());
    if let Some(c) = &a.color {
        b = b.color(c);
    }
    if let Some(w) = a.width {
        b = b.width(w);
    } else if a.fit {
        b = b.width(terminal_width());
    }
    let cfg = b.build()?;

    let t_render = Instant::now();
    let spark = render(&data, &cfg)?;
    let dur_render = t_render.elapsed().as_micros();

    let mut out = stdout().lock();
    writeln!(out, "{spark}")?;
    out.flush()?;

    if a.debug {
        eprintln!(
            "ingest: {dur_ingest} µs   render: {dur_render} µs   ({} samples)",
            data.len()
        );
    }
    Ok(())
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    for (name, code) in &NAMED {
        let label = if *name == "orange" {
            "orange | industrial"
        } else {
            *name
        };
        println!("{}", colorize(code, label));
    }
    println!(
        "{}  (#505050 or any other #RRGGBB)\n",
        colorize(&AnsiCode::rgb(0x50, 0x50, 0x50), "#505050")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "sparkify";
    println!(
        "
Example invocations
-------------------
• Inline samples   : {bin} line 1 1 -2 3 -5 8 -13
• From a file      : {bin} line --file samples.txt
• From stdin       : seq 1 10 | {bin} line
• Widened range    : {bin} line 3 4 5 --min 0 --max 10
• Fit the terminal : {bin} line --file long_series.txt --fit
• Hex color        : {bin} line 1 5 2 8 --color #6048c1
"
    );
}
