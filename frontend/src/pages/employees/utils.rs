use std::cmp::Ordering;

use leptos::*;

use crate::api::Employee;
use crate::components::data_table::{
    matches_filter, page_count, page_slice, sort_rows, Column, SortState, PAGE_SIZE,
};

pub const EMPLOYEE_COLUMNS: &[Column] = &[
    Column::sortable("code", "Code"),
    Column::sortable("name", "Name"),
    Column::sortable("department", "Department"),
    Column::plain("designation", "Designation"),
    Column::plain("email", "Email"),
    Column::sortable("joined", "Joined"),
    Column::plain("status", "Status"),
];

#[derive(Clone, Copy)]
pub struct EmployeeTableState {
    pub filter: RwSignal<String>,
    pub sort: RwSignal<Option<SortState>>,
    pub page: RwSignal<usize>,
}

impl Default for EmployeeTableState {
    fn default() -> Self {
        Self {
            filter: create_rw_signal(String::new()),
            sort: create_rw_signal(None),
            page: create_rw_signal(1),
        }
    }
}

impl EmployeeTableState {
    pub fn set_filter(&self, value: String) {
        self.filter.set(value);
        self.page.set(1);
    }
}

fn compare_by(column: &str, a: &Employee, b: &Employee) -> Ordering {
    match column {
        "code" => a.employee_code.cmp(&b.employee_code),
        "name" => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        "department" => a.department.cmp(&b.department),
        "joined" => a.joining_date.cmp(&b.joining_date),
        _ => Ordering::Equal,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployeePage {
    pub rows: Vec<Employee>,
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

/// Filter over code, name and department, then sort, then cut the page.
pub fn employee_page(
    employees: &[Employee],
    needle: &str,
    sort: Option<SortState>,
    page: usize,
) -> EmployeePage {
    let mut rows: Vec<Employee> = employees
        .iter()
        .filter(|e| {
            matches_filter(
                &[
                    e.employee_code.as_str(),
                    e.name.as_str(),
                    e.department.as_deref().unwrap_or_default(),
                ],
                needle,
            )
        })
        .cloned()
        .collect();
    if let Some(sort) = sort {
        sort_rows(&mut rows, sort.direction, |a, b| compare_by(sort.column, a, b));
    }
    let pages = page_count(rows.len(), PAGE_SIZE);
    let page = page.clamp(1, pages.max(1));
    EmployeePage {
        rows: page_slice(&rows, page, PAGE_SIZE),
        page,
        page_count: pages,
        total: rows.len(),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::api::Employee;
    use crate::test_support::helpers::date;

    pub fn employee(id: i64, code: &str, name: &str, department: &str) -> Employee {
        Employee {
            id,
            employee_code: code.into(),
            name: name.into(),
            department: Some(department.into()),
            designation: Some("Engineer".into()),
            email: Some(format!("{}@example.com", code.to_lowercase())),
            joining_date: Some(date(2020, 1, id as u32)),
            active: true,
        }
    }
}
