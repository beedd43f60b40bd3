//! Promo data model — общие типы и таблицы для landing-страницы розыгрыша.
//!
//! Всё «живое» на странице синтезируется на клиенте из фиксированных таблиц
//! этого crate: обратный отсчёт, лента недавних заявок, призовые уровни и
//! прошлые победители. Никакого backend и персистентности нет.

pub mod countdown;
pub mod entries;
pub mod prizes;
pub mod winners;
