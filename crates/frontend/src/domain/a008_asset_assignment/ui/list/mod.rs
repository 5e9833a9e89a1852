pub mod state;

use contracts::domain::a008_asset_assignment::StatusFilter;
use contracts::shared::format::{format_date, or_dash, DateFormat};
use leptos::prelude::*;
use thaw::*;

use self::state::create_state;
use crate::domain::a008_asset_assignment::api::ASSET_ASSIGNMENTS;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{FilterBar, PageHeader, PaginationControls, TableEmptyRow};
use crate::shared::list_state::ListController;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Assignment history. Records are created by assigning and returning assets.
#[component]
#[allow(non_snake_case)]
pub fn AssetAssignmentList() -> impl IntoView {
    let list = ListController::new(create_state(), StatusFilter::matches);
    let status = RwSignal::new(String::new());

    Effect::new(move |_| list.load_once(ASSET_ASSIGNMENTS));

    view! {
        <PageFrame page_id="asset_assignments--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Asset Assignments"
                subtitle="History of fixed-asset assignments and returns (read-only)"
            />

            <FilterBar
                search=list.search()
                on_search=Callback::new(move |q| list.set_search(q))
                placeholder="Search by asset code, item name, or assignee…"
                filter=Signal::derive(move || Some(status.get()))
                filter_options=StatusFilter::options()
                on_filter=Callback::new(move |value: String| {
                    list.set_filter(StatusFilter::parse(&value));
                    status.set(value);
                })
            />

            {move || list.error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false>"Asset Code"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Item"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Assigned To"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Type"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Assigned"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Expected Return"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Returned"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Condition"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Status"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=160.0>"Purpose"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = list.items();
                            if rows.is_empty() {
                                return view! { <TableEmptyRow colspan=10 loading=list.loading /> }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let code = or_dash(row.asset_code());
                                let item = or_dash(row.item_name());
                                let assignee = row.assignee_name();
                                let kind = row.assignee_kind().label();
                                let assigned = format_date(row.assigned_at.as_deref(), DateFormat::Long);
                                let expected =
                                    format_date(row.expected_return_date.as_deref(), DateFormat::Long);
                                let returned = format_date(row.returned_at.as_deref(), DateFormat::Long);
                                let condition = row.condition_on_assign.clone().unwrap_or_default();
                                let purpose = or_dash(row.purpose.as_deref());
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout><code>{code}</code></TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{item}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{assignee}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{kind}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{assigned}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{expected}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{returned}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout><StatusBadge status=condition /></TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout><StatusBadge status=row.status /></TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{purpose}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view().into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            <PaginationControls
                window=list.window()
                on_page_change=Callback::new(move |page| list.go_to_page(page))
            />
        </PageFrame>
    }
}
