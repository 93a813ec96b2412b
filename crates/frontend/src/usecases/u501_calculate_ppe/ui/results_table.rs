use super::view_model::CalculatorVm;
use crate::shared::icons::icon;
use contracts::usecases::u501_calculate_ppe::format_quantity;
use leptos::prelude::*;
use thaw::*;

/// 2. Итоговая потребность
#[component]
pub fn ResultsTable(vm: CalculatorVm) -> impl IntoView {
    let has_totals = move || vm.session.with(|s| !s.totals().is_empty());
    let rows = move || {
        vm.session.with(|s| {
            s.totals()
                .iter()
                .map(|(name, total)| (name.clone(), total.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="ppe-section">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="ppe-section__title">"2. Итоговая потребность"</h2>
                <Show when=has_totals>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.save_txt()
                        attr:title="Сохранить результат в .txt"
                    >
                        {icon("download")}
                        " Сохранить .txt"
                    </Button>
                </Show>
            </Flex>

            {move || vm.error.get().map(|e| {
                view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                }
            })}

            <div class="ppe-results">
                {move || {
                    let rows = rows();
                    if rows.is_empty() {
                        view! {
                            <div class="ppe-results__empty">
                                <p>"Нет выбранных профессий или количество сотрудников равно нулю."</p>
                                <p class="ppe-results__hint">"Добавьте профессию, чтобы увидеть расчет."</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Наименование товара"</TableHeaderCell>
                                        <TableHeaderCell>"Ед. изм."</TableHeaderCell>
                                        <TableHeaderCell>"Количество"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {rows
                                        .into_iter()
                                        .map(|(name, total)| {
                                            view! {
                                                <TableRow>
                                                    <TableCell>{name}</TableCell>
                                                    <TableCell>{total.unit}</TableCell>
                                                    <TableCell>
                                                        <span class="ppe-results__quantity">
                                                            {format_quantity(total.total_quantity)}
                                                        </span>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        })
                                        .collect_view()}
                                </TableBody>
                            </Table>
                        }
                        .into_any()
                    }
                }}
            </div>
        </section>
    }
}
