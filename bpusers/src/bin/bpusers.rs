use bpac::{
    dispatch::ActionRoutes,
    ActionFilter,
    AccessPolicy,
};
use bpcore::ac::traits::Resource;
use bpperm::{
    Builder as BackendBuilder,
    ObjectPermissionBackend,
};
use bpusers::{
    policy,
    Directory,
    User,
};
use clap::{
    Parser,
    Subcommand,
};
use http::Method;
use std::{
    fs::File,
    io::BufReader,
    path::PathBuf,
};

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// JSON file with the array of users.
    #[clap(long, value_name = "BP_USERS_FILE", env = "BP_USERS_FILE")]
    bp_users_file: PathBuf,
    #[clap(flatten)]
    backend_builder: BackendBuilder,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Authorize a request made by the actor ("-" for anonymous)
    #[command(arg_required_else_help = true)]
    Check {
        actor: String,
        method: String,
        /// The action the request is dispatched to, if not routed by method
        #[clap(long)]
        action: Option<String>,
        /// The username of the user addressed by the request
        #[clap(long)]
        target: Option<String>,
    },
    /// List the users visible to the actor
    #[command(arg_required_else_help = true)]
    List {
        actor: String,
    },
    /// List the permissions the actor holds for the target user
    #[command(arg_required_else_help = true)]
    Perms {
        actor: String,
        target: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("bpac")
        .module("bpperm")
        .module("bpusers")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let directory: Directory = serde_json::from_reader(BufReader::new(
        File::open(&args.bp_users_file)?
    ))?;
    log::info!(
        "loaded {} user(s) from {}",
        directory.users().len(),
        args.bp_users_file.display(),
    );
    let backend = args.backend_builder.build();

    match args.command {
        Commands::Check { actor, method, action, target } => {
            let policy = policy::access_policy()
                .backend(backend)
                .build()?;
            policy.validate(User::meta())?;
            parse_check(&directory, &policy, actor, method, action, target)?;
        }
        Commands::List { actor } => {
            let filter = policy::action_filter().build()?;
            filter.validate(User::meta())?;
            parse_list(&directory, &filter, actor)?;
        }
        Commands::Perms { actor, target } => {
            parse_perms(&directory, &backend, actor, target)?;
        }
    }

    Ok(())
}

fn parse_check(
    directory: &Directory,
    policy: &AccessPolicy,
    actor: String,
    method: String,
    action: Option<String>,
    target: Option<String>,
) -> anyhow::Result<()> {
    let agent = directory.agent(&actor)?;
    let method = Method::from_bytes(method.to_uppercase().as_bytes())?;
    let target = target
        .map(|username| directory.get(&username))
        .transpose()?;
    let routes = match target {
        Some(_) => ActionRoutes::detail(),
        None => ActionRoutes::collection(),
    };
    let dispatch = match action.as_deref() {
        Some(action) => routes.dispatch(method.clone()).action(action),
        None => routes.dispatch(method.clone()),
    };
    let action = dispatch.resolve_action()?;
    let decision = policy.authorize(Some(&agent), &dispatch, target)?;
    match target {
        Some(target) => println!(
            "{agent} {method} ({action}) on {}: {decision}",
            target.username,
        ),
        None => println!("{agent} {method} ({action}): {decision}"),
    }
    Ok(())
}

fn parse_list(
    directory: &Directory,
    filter: &ActionFilter,
    actor: String,
) -> anyhow::Result<()> {
    let agent = directory.agent(&actor)?;
    let users = directory.list(&agent, filter)?;
    for user in users.iter() {
        println!("{}\t{}\t{}", user.id, user.username, user.full_name());
    }
    println!("{agent} may list {} of {} user(s)", users.len(), directory.users().len());
    Ok(())
}

fn parse_perms(
    directory: &Directory,
    backend: &ObjectPermissionBackend,
    actor: String,
    target: String,
) -> anyhow::Result<()> {
    let agent = directory.agent(&actor)?;
    let target = directory.get(&target)?;
    let perms = backend.all_permissions(Some(&agent), Some(target));
    for perm in perms.iter() {
        println!("{perm}");
    }
    println!("{agent} holds {} permission(s) for {}", perms.len(), target.username);
    Ok(())
}
