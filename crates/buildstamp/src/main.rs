use std::process;

use buildstamp_cli::UserCancelled;

#[tokio::main]
async fn main() {
    if let Err(e) = buildstamp_cli::main(std::env::args().collect::<Vec<String>>().as_slice()).await
    {
        if e.downcast_ref::<UserCancelled>().is_some() {
            process::exit(130);
        }
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
