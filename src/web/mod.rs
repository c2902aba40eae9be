//! Web framework integration surface.
//!
//! This module is the boundary between a host framework's request machinery
//! and request-form's binding engine. It handles:
//! - Describing the host's parsed query object ([`Query`])
//! - Presenting that query as a [`ValueSource`](crate::ValueSource) ([`QueryValues`])
//! - A framework-free parameter list for tests and hand-built input ([`QueryParams`])
//!
//! # Design Principles
//!
//! 1. **No Framework Dependencies**: This module contains no framework-specific code.
//!    It defines interfaces that framework-specific code can implement.
//!
//! 2. **Host Presence Semantics**: The adapter reports presence the way the host
//!    does, so a key submitted without a value still counts as present.
//!
//! 3. **Explicit Context**: No global state. The query flows into
//!    [`RequestForm::process_query`](crate::RequestForm::process_query) by reference.
//!
//! # Integration Model
//!
//! Framework-specific code should:
//! 1. Implement [`Query`] for the framework's query type
//! 2. Build the form's fields for the request
//! 3. Call `form.process_query(&query)` and inspect the result
//! 4. Read bound values from the fields
//!
//! # Example Flow
//!
//! ```
//! use request_form::web::QueryParams;
//! use request_form::{Field, NumberField, RequestForm};
//!
//! let query: QueryParams = [("page", "3"), ("q", "rust")].into_iter().collect();
//!
//! let mut form = RequestForm::new();
//! let page: NumberField<i32> = NumberField::new(&mut form, "page");
//! page.set_range(1, 100);
//! let search: Field<String> = Field::new(&mut form, "q");
//!
//! let result = form.process_query(&query);
//! assert!(result.passed());
//! assert_eq!(page.value(), Some(3));
//! assert_eq!(search.value().as_deref(), Some("rust"));
//! ```

mod adapter;
mod extract;
mod params;

pub use adapter::QueryValues;
pub use extract::Query;
pub use params::QueryParams;
