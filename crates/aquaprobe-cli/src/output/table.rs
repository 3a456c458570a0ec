use aquaprobe_core::assess::outcome::{AssessmentResult, BatchResult, DetailStatus};

pub fn print(result: &BatchResult, show_all: bool, verbose: bool) {
    let multi_sample = result.samples.len() > 1;

    for (i, sample) in result.samples.iter().enumerate() {
        if multi_sample {
            if i > 0 {
                println!();
            }
            println!("--- Sample: {} ---\n", sample.sample_id);
        }
        print_assessment(&sample.assessment, show_all, verbose);
    }

    if verbose {
        println!("Threshold table: {}", result.threshold_table);
    }
}

fn print_assessment(r: &AssessmentResult, show_all: bool, verbose: bool) {
    println!(
        "  Safety score:   {}/100 ({})",
        r.safety_score, r.quality_category
    );
    println!("  Contamination:  {}", r.contamination_type);
    if verbose {
        println!("                  {}", r.contamination_reason);
    }
    println!("  Salinity:       {} ppt\n", r.salinity_level);

    // Parameter rows
    let rows: Vec<_> = r
        .details
        .iter()
        .filter(|d| show_all || d.status != DetailStatus::Normal)
        .collect();

    if !rows.is_empty() {
        let header = if show_all {
            "  Parameters:"
        } else {
            "  Flagged parameters:"
        };
        println!("{header}");

        let max_label = rows.iter().map(|d| d.label.len()).max().unwrap_or(10);
        let max_value = rows
            .iter()
            .map(|d| d.display_value.chars().count())
            .max()
            .unwrap_or(8);

        for d in &rows {
            let marker = match d.status {
                DetailStatus::Normal => "ok",
                DetailStatus::Warning => "WARNING",
                DetailStatus::Critical => "CRITICAL",
            };
            println!(
                "    {:<lw$}  {:<vw$}  {}",
                d.label,
                d.display_value,
                marker,
                lw = max_label,
                vw = max_value
            );
            if verbose {
                println!("      {}", d.description);
            }
        }
        println!();
    }

    if verbose && !r.penalties.is_empty() {
        println!("  Score breakdown:");
        for p in &r.penalties {
            println!("    -{:<6} {}", p.points.normalize(), p.reason);
        }
        println!();
    }

    println!("  Recommendations:");
    for (n, rec) in r.recommendations.iter().enumerate() {
        println!("    {}. {}", n + 1, rec);
    }
    println!();
}
