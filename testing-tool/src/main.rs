use anyhow::{anyhow, Result};
use colored::*;
use std::io::{self, Write};
use std::time::Duration;

use rental_search::client::results_session::{ClickTarget, ResultsSession, ResultsView};
use rental_search::client::search_form::SearchForm;
use rental_search::dto::search_dto::ResultsPayload;
use rental_search::repositories::LocationRepository;
use rental_search::services::search_service::RemoteCallStrategy;
use rental_search::store::search_store::{FetchStatus, SearchStore};

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🚗 Rental Search Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    let base_url = std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    println!("{} {}", "🌐 Servidor:".bright_blue(), base_url);

    let remote = RemoteCallStrategy::new(&base_url, Duration::from_secs(10))
        .map_err(|e| anyhow!("{}", e))?;
    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    let directory = LocationRepository::new();

    let mut session = ResultsSession::new();

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 🔍 Nueva búsqueda");
        println!("2. 🚘 Seleccionar vehículo");
        println!("3. ❎ Click fuera (cancelar selección)");
        println!("4. ✖️ Cerrar resumen");
        println!("5. 🔄 Repetir búsqueda desde el cliente");
        println!("6. 🚪 Salir");
        let choice = prompt("Selecciona una opción (1-6): ")?;

        match choice.as_str() {
            "1" => {
                let mut store = SearchStore::new();
                let Some(url) = fill_form(&directory)?.submit(&mut store) else {
                    println!("{}", "❌ Ciudad y fechas son obligatorias".bright_red());
                    continue;
                };
                session = ResultsSession::with_store(store);

                match load_results(&http, &base_url, &url).await? {
                    Some(payload) => {
                        session.hydrate(payload);
                    }
                    None => {
                        println!("{}", "↩️ El servidor redirigió al formulario".bright_yellow());
                        continue;
                    }
                }
                render(&session);
            }
            "2" => {
                let id = prompt("Id del vehículo: ")?;
                if session.select_by_id(&id) {
                    render(&session);
                } else {
                    println!("{}", "❌ Vehículo no encontrado en los resultados".bright_red());
                }
            }
            "3" => {
                if session.click(ClickTarget::Outside) {
                    println!("{}", "✅ Selección cancelada".bright_green());
                } else {
                    println!("{}", "ℹ️ No había vehículo seleccionado".bright_yellow());
                }
            }
            "4" => {
                session.cancel_selection();
                render(&session);
            }
            "5" => {
                let Some(params) = session.params().cloned() else {
                    println!("{}", "❌ Todavía no hay búsqueda".bright_red());
                    continue;
                };
                let status = session.refresh(&remote, params).await;
                if status == FetchStatus::Success {
                    println!("{}", "✅ Resultados actualizados".bright_green());
                }
                render(&session);
            }
            "6" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
            }
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn fill_form(directory: &LocationRepository) -> Result<SearchForm> {
    println!("{}", "🔍 BÚSQUEDA".bright_cyan().bold());
    println!("{}", "===========".bright_cyan());

    let mut form = SearchForm::new();
    let text = prompt("Ciudad o aeropuerto: ")?;
    let suggestions = form.type_city(&text, directory).to_vec();

    if !suggestions.is_empty() {
        for (index, location) in suggestions.iter().enumerate() {
            println!("  {}. {} ({})", index + 1, location.name, location.kind.label());
        }
        let pick = prompt("Sugerencia (Enter para usar el texto): ")?;
        if let Some(location) = pick
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| suggestions.get(i))
        {
            form.pick(location.clone());
        }
    }

    let pickup = prompt("Fecha de recogida (YYYY-MM-DD): ")?;
    let dropoff = prompt("Fecha de devolución (YYYY-MM-DD): ")?;
    form.set_dates(&pickup, &dropoff);
    Ok(form)
}

/// Pide la página de resultados; `None` si el servidor redirige
async fn load_results(
    http: &reqwest::Client,
    base_url: &str,
    path: &str,
) -> Result<Option<ResultsPayload>> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), path);
    println!("{} {}", "📤 GET".bright_blue(), url);

    let response = http.get(&url).send().await?;
    if response.status().is_redirection() {
        return Ok(None);
    }
    if !response.status().is_success() {
        return Err(anyhow!("HTTP {}", response.status()));
    }
    Ok(Some(response.json::<ResultsPayload>().await?))
}

fn render(session: &ResultsSession) {
    println!();
    match session.view() {
        ResultsView::Loading => println!("{}", "⏳ Buscando vehículos...".bright_yellow()),
        ResultsView::Error { message } => println!("{} {}", "❌".bright_red(), message.bright_red()),
        ResultsView::Empty { city } => {
            println!("{}", format!("🚫 No hay vehículos disponibles en {}", city).bright_yellow())
        }
        ResultsView::Listing { cars, selected_id } => {
            println!("{}", "📦 VEHÍCULOS DISPONIBLES".bright_green().bold());
            for car in &cars {
                let marker = if selected_id.as_deref() == Some(car.id.as_str()) { "👉" } else { "  " };
                println!(
                    "{} [{}] {} - {} {:.2}/día - {}",
                    marker,
                    car.id,
                    car.name.bold(),
                    car.currency,
                    car.price_per_day,
                    car.location
                );
            }
        }
    }

    if let Some(summary) = session.summary() {
        println!();
        println!("{}", "🧾 RESUMEN DE RESERVA".bright_cyan().bold());
        println!("Vehículo:   {}", summary.vehicle_name);
        if let Some(category) = &summary.category {
            println!("Categoría:  {}", category);
        }
        println!("Ubicación:  {}", summary.vehicle_location);
        println!("Ciudad:     {}", summary.city);
        println!("Recogida:   {}", summary.pickup);
        println!("Devolución: {}", summary.dropoff);
        println!("Días:       {}", summary.quote.days);
        if summary.quote.minimum_applied {
            println!("{}", "⚠️ Se aplicó el mínimo de 1 día".bright_yellow());
        }
        println!("{} {}", "Total:".bold(), summary.quote.formatted_total().bright_green().bold());
    }
}
