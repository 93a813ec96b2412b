use super::view_model::CalculatorVm;
use contracts::usecases::u501_calculate_ppe::{format_quantity, ItemBreakdown};
use leptos::prelude::*;

/// 3. Детализация расчета: вклад каждой строки выбора в итог позиции
#[component]
pub fn CalculationSteps(vm: CalculatorVm) -> impl IntoView {
    let breakdown = move || vm.session.with(|s| s.breakdown());

    move || {
        let items = breakdown();
        if items.is_empty() {
            return ().into_any();
        }

        view! {
            <section class="ppe-section ppe-section--steps">
                <h2 class="ppe-section__title">"3. Детализация расчета"</h2>
                <div class="ppe-steps">
                    {items.into_iter().map(step_card).collect_view()}
                </div>
            </section>
        }
        .into_any()
    }
}

fn step_card(item: ItemBreakdown) -> impl IntoView {
    let unit = item.total.unit.clone();
    let lines = item
        .contributions
        .into_iter()
        .map(|c| {
            let formula = format!(
                "{}\u{a0}{} × {}\u{a0}чел. = {}\u{a0}{}",
                format_quantity(c.quantity_per_employee),
                unit,
                c.headcount,
                format_quantity(c.subtotal),
                unit
            );
            view! {
                <li class="ppe-steps__line">
                    <span>{format!("{}:", c.profession_name)}</span>
                    <span class="ppe-steps__formula">{formula}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="ppe-steps__item">
            <div class="ppe-steps__header">
                <h3>{item.item_name}</h3>
                <p class="ppe-steps__total">
                    {format_quantity(item.total.total_quantity)}
                    " "
                    <span class="ppe-steps__unit">{item.total.unit}</span>
                </p>
            </div>
            <ul class="ppe-steps__lines">{lines}</ul>
        </div>
    }
}
