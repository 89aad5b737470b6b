//! Interactive console session
//!
//! One user action runs to completion before the next is read, mirroring the
//! button-serialized flow of a form UI. The session owns the only mutable
//! cross-action state: the current metrics record and the last generated
//! summary.

use std::io::{self, Write};

use tracing::info;

use crate::api::{LlmClient, MarketDataClient};
use crate::export::DocumentExporter;
use crate::models::{CompanyMetrics, Config, ExportFormat, RawPrivateInput};
use crate::sources;
use crate::summary::SummaryGenerator;

/// Per-session mutable state
#[derive(Debug, Default)]
pub struct SessionState {
    pub metrics: Option<CompanyMetrics>,
    pub summary: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly loaded company record
    ///
    /// Invalidates any summary generated for the previous company.
    pub fn load(&mut self, metrics: CompanyMetrics) {
        self.metrics = Some(metrics);
        self.summary = None;
    }
}

pub struct Session {
    market: MarketDataClient,
    generator: SummaryGenerator,
    exporter: DocumentExporter,
    state: SessionState,
}

impl Session {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            market: MarketDataClient::new(config)?,
            generator: SummaryGenerator::new(LlmClient::new(config)?),
            exporter: DocumentExporter::new(&config.output_dir),
            state: SessionState::new(),
        })
    }

    /// Run the interactive menu loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        println!();
        println!("📊 VALUATION SUMMARY BUILDER");
        println!("============================");

        loop {
            println!();
            println!("1. Load public company (by ticker)");
            println!("2. Enter private company data");
            println!("3. Generate valuation summary");
            println!("4. Export to PDF");
            println!("5. Export to Word");
            println!("6. Quit");

            let choice = prompt_line("Select an option: ")?;
            match choice.as_str() {
                "1" => self.load_public().await?,
                "2" => self.load_private()?,
                "3" => self.generate_summary().await,
                "4" => self.export(ExportFormat::Pdf),
                "5" => self.export(ExportFormat::Docx),
                "6" | "q" => break,
                _ => println!("❌ Unknown option: {}", choice),
            }
        }

        println!("Thanks for using the Valuation Summary Builder!");
        Ok(())
    }

    /// One-shot public company run: fetch, summarize, export both formats
    pub async fn run_ticker(&mut self, ticker: &str) -> anyhow::Result<()> {
        println!("Fetching company data for {}...", ticker);
        match sources::fetch_public(&self.market, ticker).await {
            Ok(metrics) => {
                display_metrics(&metrics);
                self.state.load(metrics);
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }

        self.generate_summary().await;
        self.export(ExportFormat::Pdf);
        self.export(ExportFormat::Docx);
        Ok(())
    }

    async fn load_public(&mut self) -> anyhow::Result<()> {
        let ticker = prompt_line("Enter Stock Ticker (e.g., AAPL): ")?;

        println!("Fetching company data...");
        match sources::fetch_public(&self.market, &ticker).await {
            Ok(metrics) => {
                display_metrics(&metrics);
                self.state.load(metrics);
            }
            Err(e) => println!("❌ {}", e),
        }
        Ok(())
    }

    fn load_private(&mut self) -> anyhow::Result<()> {
        println!();
        println!("Company Information");
        let input = RawPrivateInput {
            name: prompt_line("Company Name: ")?,
            industry: prompt_line("Industry: ")?,
            revenue_millions: prompt_line("Revenue (in millions $): ")?,
            revenue_growth: prompt_line("Revenue Growth (%): ")?,
            profit_margin: prompt_line("Profit Margin (%): ")?,
            ebitda_margin: prompt_line("EBITDA Margin (%): ")?,
            competitors: prompt_line("Key Competitors (comma-separated): ")?,
        };

        match sources::process_private(&input) {
            Ok(metrics) => {
                display_metrics(&metrics);
                self.state.load(metrics);
            }
            Err(e) => println!("❌ {}", e),
        }
        Ok(())
    }

    async fn generate_summary(&mut self) {
        let Some(metrics) = &self.state.metrics else {
            println!("💡 Load a company first (option 1 or 2).");
            return;
        };

        println!("Generating summary...");
        let summary = self.generator.generate(metrics).await;

        println!();
        println!("Valuation Summary");
        println!("-----------------");
        println!("{}", summary);
        self.state.summary = Some(summary);
    }

    fn export(&self, format: ExportFormat) {
        let (Some(metrics), Some(summary)) = (&self.state.metrics, &self.state.summary) else {
            println!("💡 Generate a valuation summary first (option 3).");
            return;
        };

        match self.exporter.export(metrics, summary, format) {
            Ok(path) => println!("✅ Exported to {}", path.display()),
            Err(e) => println!("❌ {}", e),
        }
    }
}

fn display_metrics(metrics: &CompanyMetrics) {
    println!();
    println!("📈 Company Data: {}", metrics.name);
    println!("   Industry:       {}", metrics.industry);
    if let Some(market_cap) = metrics.market_cap {
        println!("   Market Cap:     ${:.2}B", market_cap);
    }
    println!("   Revenue:        ${:.2}B", metrics.revenue);
    println!("   Net Income:     ${:.2}B", metrics.net_income);
    if let Some(pe_ratio) = metrics.pe_ratio {
        println!("   P/E Ratio:      {:.2}", pe_ratio);
    }
    println!("   Revenue Growth: {:.1}%", metrics.revenue_growth);
    println!("   Profit Margin:  {:.1}%", metrics.profit_margin);
    if let Some(ebitda_margin) = metrics.ebitda_margin {
        println!("   EBITDA Margin:  {:.1}%", ebitda_margin);
    }
    if !metrics.competitors.is_empty() {
        println!("   Competitors:    {}", metrics.competitors.join(", "));
    }
    info!("Displayed metrics for {}", metrics.name);
}

/// Prompt for one line of input
fn prompt_line(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
