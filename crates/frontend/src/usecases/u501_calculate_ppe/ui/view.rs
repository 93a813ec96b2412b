//! Калькулятор СИЗ - View Component

use super::calculation_steps::CalculationSteps;
use super::model::fetch_catalog;
use super::profession_selector::ProfessionSelector;
use super::results_table::ResultsTable;
use super::view_model::CalculatorVm;
use crate::usecases::u502_import_norms::view::NormsImport;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_calculate_ppe::CalculatePpe;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CalculatorPage() -> impl IntoView {
    let vm = CalculatorVm::new();

    // Справочник с сервера; без сервера остаются встроенные нормы
    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_catalog().await {
                Ok(catalog) => vm.load_catalog(catalog),
                Err(e) => log::warn!("Norms catalog is not available, using built-in norms: {}", e),
            }
        });
    });

    view! {
        <main class="ppe-calculator">
            <Card>
                <header class="ppe-calculator__header">
                    <h1>{CalculatePpe::display_name()}</h1>
                    <p class="ppe-calculator__subtitle">{CalculatePpe::description()}</p>
                </header>

                <PeriodSelector vm=vm />
                <NormsImport vm=vm />
                <ProfessionSelector vm=vm />
                <ResultsTable vm=vm />
                <CalculationSteps vm=vm />
            </Card>
        </main>
    }
}

#[component]
fn PeriodSelector(vm: CalculatorVm) -> impl IntoView {
    let periods = move || vm.session.with(|s| s.periods());
    let active = move || vm.session.with(|s| s.active_period().to_string());

    view! {
        <section class="ppe-section">
            <h2 class="ppe-section__title">"Выберите период норм"</h2>
            <select
                class="ppe-field__input"
                on:change=move |ev| vm.change_period(event_target_value(&ev))
            >
                {move || {
                    let current = active();
                    periods()
                        .into_iter()
                        .map(|period| {
                            let selected = period == current;
                            view! {
                                <option value=period.clone() selected=selected>{period.clone()}</option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </section>
    }
}
