pub mod results_controller;
