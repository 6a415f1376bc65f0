// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Orchestrates the data and infra layers for one CLI command.
// No parsing of command-line flags here (Layer 1) and no
// pipeline stage logic (Layer 4).

// Settings shared by the batch and tensor workflows
pub mod pipeline_config;

// Stream batches as JSON lines
pub mod batch_use_case;

// Batches as burn tensors through the DataLoader
pub mod tensor_use_case;

// Build a vocabulary file and look tokens up in one
pub mod vocab_use_case;
