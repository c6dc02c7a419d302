//! # PetroBahia Demo
//!
//! Walks the whole platform once with fixed fleet data: registers the
//! customer roster, prices the day's order batch and prints the report.
//!
//! ## Usage
//! ```bash
//! # Run with the default ledger file (./clientes.txt)
//! cargo run -p petro-demo --bin demo
//!
//! # Keep the ledger somewhere else
//! cargo run -p petro-demo --bin demo -- --file ./data/clientes.txt
//!
//! # Show store/pipeline internals
//! RUST_LOG=debug cargo run -p petro-demo --bin demo
//! ```
//!
//! ## Report Sections
//! - customer registration, one status line per roster entry
//! - approved customer table and rejected list
//! - order batch: per-order diagnostics and final prices
//! - grand total

use std::collections::HashSet;
use std::env;

use petro_core::{CustomerDraft, DiagnosticSink, OrderPipeline, OrderRequest};
use petro_store::{CustomerLedger, RegistrationService};
use serde_json::{json, Value};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut ledger_file = String::from("clientes.txt");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    ledger_file = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("PetroBahia Order Demo");
                println!();
                println!("Usage: demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>  Customer ledger file (default: clientes.txt)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    // Initialize tracing; the report itself goes straight to stdout
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let service = RegistrationService::new(CustomerLedger::new(&ledger_file)?);
    let pipeline = OrderPipeline::with_defaults()?;
    let mut sink = ConsoleSink;

    println!("{}", "=".repeat(60));
    println!("        SISTEMA INTERNO PETROBAHIA - DEMO");
    println!("{}", "=".repeat(60));

    println!("\n--- CADASTRO DE CLIENTES ---");
    let mut approved: Vec<CustomerDraft> = Vec::new();
    let mut rejected: Vec<CustomerDraft> = Vec::new();

    for payload in customer_roster() {
        let draft: CustomerDraft = serde_json::from_value(payload)?;
        match service.register(&draft, &mut sink) {
            Ok(true) => {
                println!(
                    "cliente ok:         {}",
                    draft.name.as_deref().unwrap_or_default()
                );
                approved.push(draft);
            }
            Ok(false) => {
                println!("cliente com problema: {}", serde_json::to_string(&draft)?);
                rejected.push(draft);
            }
            Err(store_error) => {
                error!(%store_error, "customer registration hit a storage failure");
                println!("cliente com problema: {}", serde_json::to_string(&draft)?);
                rejected.push(draft);
            }
        }
    }

    println!("\nResumo cadastro de clientes:");
    println!("  - validos  : {}", approved.len());
    println!("  - invalidos: {}", rejected.len());

    if !approved.is_empty() {
        println!("\nClientes aprovados:");
        println!("{:<15} {:<30} {:<14}", "NOME", "EMAIL", "CNPJ");
        println!("{}", "-".repeat(65));
        for draft in &approved {
            println!(
                "{:<15} {:<30} {:<14}",
                draft.name.as_deref().unwrap_or_default(),
                draft.email.as_deref().unwrap_or_default(),
                draft.cnpj.as_deref().unwrap_or_default()
            );
        }
    }

    if !rejected.is_empty() {
        println!("\nClientes rejeitados:");
        for draft in &rejected {
            println!("  - {}", serde_json::to_string(draft)?);
        }
    }

    println!("\n--- PROCESSAMENTO DE PEDIDOS ---");
    let accepted_names: HashSet<&str> = approved
        .iter()
        .filter_map(|draft| draft.name.as_deref())
        .collect();
    let mut totals: Vec<f64> = Vec::new();

    for payload in order_batch() {
        let request: OrderRequest = serde_json::from_value(payload)?;
        if !accepted_names.contains(request.customer.as_str()) {
            println!(
                "pedido rejeitado: {} - cliente nao cadastrado ou invalido",
                request.customer
            );
            continue;
        }

        match pipeline.process(&request, &mut sink) {
            Ok(price) => {
                totals.push(price);
                println!(
                    "pedido: {} -- valor final: {}",
                    serde_json::to_string(&request)?,
                    price
                );
            }
            Err(core_error) => {
                println!(
                    "pedido com problema: {} {} - {}",
                    request.customer, request.product, core_error
                );
            }
        }
    }

    if totals.is_empty() {
        println!("\nNenhum pedido valido foi processado.");
    } else {
        println!("\nTOTAL GERAL = {}", totals.iter().sum::<f64>());
    }

    println!("\n{}", "=".repeat(60));
    println!("           FIM DO PROCESSAMENTO PETROBAHIA");
    println!("{}", "=".repeat(60));

    let records = service.ledger().load_all()?;
    debug!(
        records = records.len(),
        path = %service.ledger().path().display(),
        "ledger state after run"
    );

    Ok(())
}

/// Forwards every pipeline/service diagnostic straight to stdout, where
/// the report expects it.
struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn emit(&mut self, message: String) {
        println!("{message}");
    }
}

/// The fleet customers the walkthrough tries to register. The last one
/// carries a broken email and cnpj on purpose.
fn customer_roster() -> Vec<Value> {
    vec![
        json!({
            "nome": "TransLog",
            "email": "contato@translog.com.br",
            "cnpj": "12345678000199",
        }),
        json!({
            "nome": "MoveMais",
            "email": "contato@movemais.com.br",
            "cnpj": "98765432000188",
        }),
        json!({
            "nome": "EcoFrota",
            "email": "contato@ecofrota.com.br",
            "cnpj": "11223344000155",
        }),
        json!({
            "nome": "PetroPark",
            "email": "contato@petropark.com.br",
            "cnpj": "55443322000111",
        }),
        json!({
            "nome": "Cliente Invalido",
            "email": "ana@@petrobahia",
            "cnpj": "123",
        }),
    ]
}

/// The day's order batch. Orders from customers that failed
/// registration are rejected before pricing.
fn order_batch() -> Vec<Value> {
    vec![
        json!({ "cliente": "TransLog", "produto": "diesel", "qtd": 1200, "cupom": "MEGA10" }),
        json!({ "cliente": "MoveMais", "produto": "gasolina", "qtd": 300, "cupom": null }),
        json!({ "cliente": "EcoFrota", "produto": "etanol", "qtd": 50, "cupom": "NOVO5" }),
        json!({ "cliente": "PetroPark", "produto": "lubrificante", "qtd": 12, "cupom": "LUB2" }),
        json!({ "cliente": "Cliente Invalido", "produto": "diesel", "qtd": 10, "cupom": null }),
    ]
}
