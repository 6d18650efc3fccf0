pub mod clock_action;
pub mod colaborador;
pub mod jornada;
pub mod shift_status;
