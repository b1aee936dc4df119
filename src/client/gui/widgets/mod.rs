pub mod book_card;
