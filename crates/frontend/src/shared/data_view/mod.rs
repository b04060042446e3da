//! Универсальные страницы коллекции: список с фильтрами и карточка записи с вкладками.
//!
//! Каждая сущность описывает колонки, поля вкладок и поля формы через [`RecordView`],
//! всё остальное (загрузка, фильтрация, пагинация, удаление, сохранение) общее.

pub mod api;
pub mod detail;
pub mod form;
pub mod list;
pub mod view;

pub use detail::RecordDetailPage;
pub use list::RecordList;
pub use view::{Cell, FormField, RecordView};
