pub mod final_decision;
