pub mod battle;
pub mod damage;
pub mod turn;
