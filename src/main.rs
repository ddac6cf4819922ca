// Entry point and interactive session flow.
//
// The console session mirrors the dashboard interaction cycle:
// - Option [1] loads the community impact CSV and confirms the row count.
// - Option [2] shows the data table and per-community metric views.
// - Option [3] exports the PDF report for a selected community.
// - After exporting a report, the user can go back to the menu or exit.
use geia_impact::filter::{distinct_communities, filter_by_community};
use geia_impact::types::ImpactRecord;
use geia_impact::{loader, output, report, util, views};
use once_cell::sync::Lazy;
use std::io::{self, Write};
use std::sync::Mutex;

const DEFAULT_DATA_FILE: &str = "community_impact_data.csv";

// Simple in-memory app state so the CSV is loaded once per upload but can
// feed metric views and reports any number of times in a single session.
// A new load replaces the table entirely.
static APP_STATE: Lazy<Mutex<AppState>> = Lazy::new(|| Mutex::new(AppState { data: None }));

struct AppState {
    data: Option<Vec<ImpactRecord>>,
}

/// Print a prompt and read a single trimmed line from stdin.
fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf.trim().to_string()
}

fn read_choice() -> String {
    read_line("Enter choice: ")
}

/// Ask the user whether to go back to the menu after generating a report.
///
/// Returns `true` if the user chose `Y`, `false` if they chose `N`.
fn prompt_back_to_menu() -> bool {
    loop {
        match read_line("Back to Menu (Y/N): ").to_uppercase().as_str() {
            "Y" => return true,
            "N" => return false,
            _ => println!("Invalid choice. Please enter Y or N."),
        }
    }
}

/// Offer the distinct communities of the loaded table as a numbered list
/// and return the chosen one. Only communities actually present in the
/// table can be selected, so a selection always has at least one record.
fn select_community(data: &[ImpactRecord], heading: &str) -> Option<String> {
    let communities = distinct_communities(data);
    if communities.is_empty() {
        println!("No communities present in the loaded data.\n");
        return None;
    }
    println!("{}", heading);
    for (idx, name) in communities.iter().enumerate() {
        println!("[{}] {}", idx + 1, name);
    }
    match read_choice().parse::<usize>() {
        Ok(n) if (1..=communities.len()).contains(&n) => Some(communities[n - 1].clone()),
        _ => {
            println!(
                "Invalid choice. Please enter a number between 1 and {}.\n",
                communities.len()
            );
            None
        }
    }
}

/// Handle option [1]: load the impact CSV into `APP_STATE`.
///
/// Any load failure (missing file, missing required column, malformed row)
/// leaves the previous table untouched and prints the error; nothing is
/// retried.
fn handle_load() {
    let path = {
        let input = read_line(&format!("CSV file path [{}]: ", DEFAULT_DATA_FILE));
        if input.is_empty() {
            DEFAULT_DATA_FILE.to_string()
        } else {
            input
        }
    };
    match loader::load_table(&path) {
        Ok((data, load_report)) => {
            println!(
                "Data uploaded successfully! ({} rows loaded)\n",
                util::format_int(load_report.total_rows as i64)
            );
            let mut state = APP_STATE.lock().unwrap();
            state.data = Some(data);
        }
        Err(e) => {
            eprintln!("Failed to load file: {}", e);
            eprintln!("Please upload a CSV to proceed.\n");
        }
    }
}

/// Handle option [2]: preview the data table, then show the four metric
/// views for a selected community.
fn handle_view() {
    let data = {
        let state = APP_STATE.lock().unwrap();
        state.data.clone()
    };
    let Some(data) = data else {
        println!("Error: No data loaded. Please load the CSV file first (option 1).\n");
        return;
    };

    println!("Community Impact Metrics\n");
    output::preview_table(&views::metrics_rows(&data), 10);

    let Some(community) = select_community(&data, "Select a Community") else {
        return;
    };
    let filtered = filter_by_community(&data, &community);

    println!("\nCommunity Sentiment Analysis");
    output::print_table(&views::sentiment_rows(&filtered));
    println!("Income Growth vs. Employment Rate");
    output::print_table(&views::income_employment_rows(&filtered));
    println!("Food Security Index Across Communities");
    output::print_table(&views::food_security_rows(&filtered));
    println!("Education Access Comparison");
    output::print_table(&views::education_rows(&filtered));
}

/// Handle option [3]: generate the PDF report for a selected community and
/// write it to the fixed artifact name.
fn handle_report() {
    let data = {
        let state = APP_STATE.lock().unwrap();
        state.data.clone()
    };
    let Some(data) = data else {
        println!("Error: No data loaded. Please load the CSV file first (option 1).\n");
        return;
    };

    let Some(community) = select_community(&data, "Generate Report for Community") else {
        return;
    };
    let filtered = filter_by_community(&data, &community);
    let document = report::generate_report(&community, &filtered);

    match output::write_pdf(report::REPORT_FILE_NAME, &document) {
        Ok(bytes) => {
            println!("Report generated successfully!");
            println!(
                "({} written, {} bytes)\n",
                report::REPORT_FILE_NAME,
                util::format_int(bytes.len() as i64)
            );
        }
        Err(e) => {
            eprintln!("Failed to generate report: {}\n", e);
        }
    }
}

fn main() {
    println!("GEIA Social Impact Dashboard");
    println!("Community Impact Metrics\n");
    loop {
        println!("[1] Load the data file");
        println!("[2] View community metrics");
        println!("[3] Generate PDF report\n");
        match read_choice().as_str() {
            "1" => {
                handle_load();
            }
            "2" => {
                println!();
                handle_view();
            }
            "3" => {
                println!();
                handle_report();
                if !prompt_back_to_menu() {
                    println!("Exiting the program.");
                    break;
                }
            }
            _ => {
                println!("Invalid choice. Please enter 1, 2, or 3.\n");
            }
        }
    }
}
